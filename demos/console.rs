//! Plans a path across a randomly obstructed grid from the top-left to the bottom-right corner
//! and prints the result.
//!
//! `cargo run --example console -- --rows 12 --cols 20 --density 25`
use anyhow::Context;
use clap::Parser;
use grid_astar::{OccupancyGrid, PathOverlay, PathPlanner, RobotState};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "console", about = "A* path planning on a random occupancy grid.")]
struct Cli {
    #[arg(
        long,
        help = "Number of rows (maximum 50)",
        default_value_t = 10,
        value_parser = clap::value_parser!(u16).range(1..=50)
    )]
    rows: u16,

    #[arg(
        long,
        help = "Number of columns (maximum 50)",
        default_value_t = 10,
        value_parser = clap::value_parser!(u16).range(1..=50)
    )]
    cols: u16,

    #[arg(
        long,
        help = "Obstacle density in percent (0-100)",
        default_value_t = 20.0,
        value_parser = parse_density
    )]
    density: f64,

    #[arg(long, help = "Seed for the random number generator")]
    seed: Option<u64>,
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=100.0).contains(&density) {
        Ok(density)
    } else {
        Err("Please enter a number between 0 and 100.".to_owned())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (rows, cols) = (cli.rows as usize, cli.cols as usize);
    let mut grid = OccupancyGrid::new(rows, cols);
    grid.place_random_obstacles(cli.density / 100.0, &mut rng)
        .context("placing obstacles")?;

    let start = RobotState::new(0, 0);
    let goal = RobotState::new(rows as i32 - 1, cols as i32 - 1);
    let path = match PathPlanner::new().find_path(&grid, start, goal) {
        Ok(path) => path,
        Err(e) => {
            print!("{}", PathOverlay::new(&grid, start.cell, goal.cell, &Default::default()));
            println!("No path found: {e}");
            return Ok(());
        }
    };

    print!("{}", PathOverlay::new(&grid, start.cell, goal.cell, &path));
    if path.is_empty() {
        println!("No path found.");
    } else {
        println!("Optimal path found:");
        for cell in &path {
            println!("{cell}");
        }
    }
    Ok(())
}

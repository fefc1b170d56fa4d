use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{Cell, OccupancyGrid, PathPlanner, PlannerConfig, RobotState};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N_SCENARIOS: usize = 50;

fn random_scenarios(grid: &OccupancyGrid, rng: &mut StdRng) -> Vec<(RobotState, RobotState)> {
    let free: Vec<Cell> = grid.cells().filter(|c| grid.can_move_to(*c)).collect();
    (0..N_SCENARIOS)
        .map(|_| {
            let start = free[rng.gen_range(0..free.len())];
            let goal = free[rng.gen_range(0..free.len())];
            (RobotState::from(start), RobotState::from(goal))
        })
        .collect()
}

fn random_grid_bench(c: &mut Criterion) {
    for (n, density) in [(32, 0.2), (64, 0.3), (128, 0.3)] {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = OccupancyGrid::new(n, n);
        grid.place_random_obstacles(density, &mut rng).unwrap();
        let scenarios = random_scenarios(&grid, &mut rng);
        for use_components in [false, true] {
            let planner =
                PathPlanner::with_config(PlannerConfig::default().with_components(use_components));
            let components_str = if use_components { " (components)" } else { "" };
            c.bench_function(
                format!("{n}x{n}, density {density}{components_str}").as_str(),
                |b| {
                    b.iter(|| {
                        for (start, goal) in &scenarios {
                            black_box(planner.find_path(&grid, *start, *goal).ok());
                        }
                    })
                },
            );
        }
    }
}

fn open_grid_bench(c: &mut Criterion) {
    let grid = OccupancyGrid::new(256, 256);
    let planner = PathPlanner::new();
    c.bench_function("256x256 open, corner to corner", |b| {
        b.iter(|| {
            black_box(planner.find_path(&grid, RobotState::new(0, 0), RobotState::new(255, 255)))
        })
    });
}

criterion_group!(benches, random_grid_bench, open_grid_bench);
criterion_main!(benches);

use grid_astar::{Cell, OccupancyGrid, PathPlanner, RobotState};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = OccupancyGrid::new(3, 3);
    grid.set(Cell::new(1, 1), true);
    grid.update();
    println!("{}", grid);
    let path = PathPlanner::new()
        .find_path(&grid, RobotState::new(0, 0), RobotState::new(2, 2))
        .unwrap();
    println!("Path:");
    for p in path {
        println!("{:?}", p);
    }
}

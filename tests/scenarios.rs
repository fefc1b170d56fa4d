use grid_astar::{
    Cell, OccupancyGrid, Orientation, PathOverlay, PathPlanner, PlanError, RobotState,
};

#[test]
fn open_grid_paths_have_manhattan_length() {
    let grid = OccupancyGrid::new(7, 5);
    let planner = PathPlanner::new();
    for row in 0..7 {
        for col in 0..5 {
            let path = planner
                .find_path(&grid, RobotState::new(0, 0), RobotState::new(row, col))
                .unwrap();
            assert_eq!(path.cost(), (row + col) as u32);
            assert!(path.is_valid(&grid));
        }
    }
}

#[test]
fn three_by_three_open_grid() {
    let grid = OccupancyGrid::new(3, 3);
    let path = PathPlanner::new()
        .find_path(&grid, RobotState::new(0, 0), RobotState::new(2, 2))
        .unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(path.cost(), 4);
    // Any monotone staircase is optimal.
    assert!(path
        .cells()
        .windows(2)
        .all(|w| w[1].row >= w[0].row && w[1].col >= w[0].col));
}

#[test]
fn three_by_three_blocked_middle_column() {
    let mut grid = OccupancyGrid::new(3, 3);
    for row in 0..3 {
        grid.set(Cell::new(row, 1), true);
    }
    grid.update();
    let path = PathPlanner::new()
        .find_path(&grid, RobotState::new(0, 0), RobotState::new(0, 2))
        .unwrap();
    assert!(path.is_empty());
}

#[test]
fn goal_on_obstacle_is_rejected() {
    let grid = OccupancyGrid::from_ascii("..\n.#").unwrap();
    let result = PathPlanner::new().find_path(&grid, RobotState::new(0, 0), RobotState::new(1, 1));
    assert_eq!(result, Err(PlanError::InvalidGoal { row: 1, col: 1 }));
}

#[test]
fn orientation_does_not_change_the_result() {
    let grid = OccupancyGrid::from_ascii(
        "
        .....
        .###.
        ...#.
        ",
    )
    .unwrap();
    let planner = PathPlanner::new();
    let facing_north = planner
        .find_path(&grid, RobotState::new(2, 0), RobotState::new(2, 4))
        .unwrap();
    let facing_west = planner
        .find_path(
            &grid,
            RobotState::with_orientation(2, 0, Orientation::East),
            RobotState::with_orientation(2, 4, Orientation::West),
        )
        .unwrap();
    assert_eq!(facing_north, facing_west);
    assert_eq!(facing_north.cost(), 8);
}

#[test]
fn repeated_queries_agree() {
    let grid = OccupancyGrid::from_ascii(
        "
        ..#......
        ..#.###..
        ....#....
        .####.##.
        .........
        ",
    )
    .unwrap();
    let planner = PathPlanner::new();
    let (start, goal) = (RobotState::new(0, 0), RobotState::new(0, 8));
    let first = planner.find_path(&grid, start, goal).unwrap();
    let second = planner.find_path(&grid, start, goal).unwrap();
    assert_eq!(first, second);
    assert!(first.is_valid(&grid));
}

#[test]
fn overlay_matches_console_format() {
    let grid = OccupancyGrid::new(2, 2);
    let path = PathPlanner::new()
        .find_path(&grid, RobotState::new(0, 0), RobotState::new(1, 1))
        .unwrap();
    let text = PathOverlay::new(&grid, Cell::new(0, 0), Cell::new(1, 1), &path).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Grid:");
    assert!(lines[1].starts_with("S "));
    assert!(lines[2].ends_with("G "));
    assert_eq!(text.matches('*').count(), 1);
}

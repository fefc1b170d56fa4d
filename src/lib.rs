//! # grid_astar
//!
//! Shortest paths for a point-like agent on a uniform 2-D occupancy grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Movement is 4-connected with unit step cost, which makes the heuristic consistent
//! and every returned path optimal.
//!
//! The search keeps its state in three containers owned by a single call: a binary heap
//! [Frontier](search::frontier::Frontier), a [VisitedSet](search::visited::VisitedSet) and a
//! [CostMap](search::cost_map::CostMap). Search nodes are immutable; improving the cost of a
//! cell inserts a fresh node and the outdated frontier entry is skipped when popped.
//!
//! ```
//! use grid_astar::{Cell, OccupancyGrid, PathPlanner, RobotState};
//!
//! let mut grid = OccupancyGrid::new(3, 3);
//! grid.set(Cell::new(1, 1), true);
//! let planner = PathPlanner::new();
//! let path = planner
//!     .find_path(&grid, RobotState::new(0, 0), RobotState::new(2, 2))
//!     .unwrap();
//! assert_eq!(path.len(), 5);
//! ```
pub mod grid;
pub mod node;
pub mod planner;
pub mod render;
pub mod search;

pub use grid::{Cell, GridError, OccupancyGrid};
pub use node::{Orientation, RobotState, SearchNode};
pub use planner::{Path, Plan, PathPlanner, PlanError, PlannerConfig, SearchStats};
pub use render::PathOverlay;

/// Cost of a single cardinal move.
pub const STEP_COST: u32 = 1;
/// Upper bound on the number of neighbours a cell can have on a 4-connected grid.
pub const N_SMALLVEC_SIZE: usize = 4;

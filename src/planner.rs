use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, info, trace, warn};
use thiserror::Error;

use crate::grid::{Cell, OccupancyGrid};
use crate::node::{RobotState, SearchNode};
use crate::search::SearchContext;
use crate::STEP_COST;

/// Reasons a query is rejected or abandoned. An unreachable goal is not an error: it yields an
/// empty [Path].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("start cell ({row}, {col}) is out of bounds or occupied")]
    InvalidStart { row: i32, col: i32 },
    #[error("goal cell ({row}, {col}) is out of bounds or occupied")]
    InvalidGoal { row: i32, col: i32 },
    #[error("search aborted after expanding {expanded} cells")]
    Aborted { expanded: usize },
}

pub type Result<T> = std::result::Result<T, PlanError>;

/// Cells from start to goal, both inclusive. An empty path means the goal cannot be reached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn new(cells: Vec<Cell>) -> Path {
        Path { cells }
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Number of moves, which equals the path cost under unit step cost.
    pub fn cost(&self) -> u32 {
        self.cells.len().saturating_sub(1) as u32 * STEP_COST
    }
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }
    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
    /// Checks that every cell is free on `grid` and consecutive cells are 4-adjacent.
    pub fn is_valid(&self, grid: &OccupancyGrid) -> bool {
        self.cells.iter().all(|c| grid.can_move_to(*c))
            && self.cells.iter().tuple_windows().all(|(a, b)| a.is_adjacent(b))
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Counters describing the work done by one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the frontier and finalized.
    pub expanded: usize,
    /// Distinct cells that received a cost.
    pub discovered: usize,
    /// Outdated frontier entries skipped on extraction.
    pub stale_skipped: usize,
}

/// Result of [PathPlanner::plan]: the path together with what the search touched.
#[derive(Clone, Debug, Default)]
pub struct Plan {
    pub path: Path,
    pub stats: SearchStats,
    explored: Vec<Cell>,
}

impl Plan {
    /// Every cell that received a cost, in discovery order.
    pub fn explored(&self) -> &[Cell] {
        &self.explored
    }
}

/// Limits and shortcuts applied to every query of a [PathPlanner].
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Abort after finalizing this many cells.
    pub max_expansions: Option<usize>,
    /// Abort once the search has run for this long.
    pub time_budget: Option<Duration>,
    /// Consult the grid's connected components before searching. Ignored while the components
    /// are dirty.
    pub use_components: bool,
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig {
            max_expansions: None,
            time_budget: None,
            use_components: true,
        }
    }
}

impl PlannerConfig {
    pub fn with_max_expansions(mut self, max_expansions: usize) -> PlannerConfig {
        self.max_expansions = Some(max_expansions);
        self
    }
    pub fn with_time_budget(mut self, time_budget: Duration) -> PlannerConfig {
        self.time_budget = Some(time_budget);
        self
    }
    pub fn with_components(mut self, use_components: bool) -> PlannerConfig {
        self.use_components = use_components;
        self
    }
}

/// 4-connected A* with unit step cost and the Manhattan distance as heuristic.
#[derive(Clone, Debug, Default)]
pub struct PathPlanner {
    pub config: PlannerConfig,
}

impl PathPlanner {
    pub fn new() -> PathPlanner {
        PathPlanner::default()
    }
    pub fn with_config(config: PlannerConfig) -> PathPlanner {
        PathPlanner { config }
    }

    /// Manhattan distance, which is consistent for 4-connected unit-cost grids.
    pub fn heuristic(&self, a: &Cell, b: &Cell) -> u32 {
        a.manhattan_distance(b) * STEP_COST
    }

    /// Computes an optimal path from start to goal. The orientation of both states is carried
    /// along but does not influence the result.
    pub fn find_path(
        &self,
        grid: &OccupancyGrid,
        start: RobotState,
        goal: RobotState,
    ) -> Result<Path> {
        self.plan(grid, start, goal).map(|plan| plan.path)
    }

    /// Like [find_path](Self::find_path), but also reports the search statistics and the explored
    /// region.
    pub fn plan(&self, grid: &OccupancyGrid, start: RobotState, goal: RobotState) -> Result<Plan> {
        if !grid.can_move_to(start.cell) {
            return Err(PlanError::InvalidStart {
                row: start.row(),
                col: start.col(),
            });
        }
        if !grid.can_move_to(goal.cell) {
            return Err(PlanError::InvalidGoal {
                row: goal.row(),
                col: goal.col(),
            });
        }
        if self.config.use_components {
            if grid.components_dirty {
                warn!("Components are dirty, searching without reachability check");
            } else if grid.unreachable(&start.cell, &goal.cell) {
                info!("{} is not reachable from {}", goal.cell, start.cell);
                return Ok(Plan::default());
            }
        }
        debug!("Computing path from {} to {}", start.cell, goal.cell);
        self.astar(grid, &start, &goal)
    }

    fn astar(&self, grid: &OccupancyGrid, start: &RobotState, goal: &RobotState) -> Result<Plan> {
        let started = Instant::now();
        let mut ct = SearchContext::new(grid);
        let mut stats = SearchStats::default();
        ct.push(SearchNode::root(start, self.heuristic(&start.cell, &goal.cell)));

        while let Some(current) = ct.frontier.extract_min() {
            // A cell may have been queued several times if a cheaper route was found later.
            // Only the entry matching the cost map is current.
            if ct.is_stale(&current) {
                stats.stale_skipped += 1;
                continue;
            }
            if current.key() == goal.cell {
                let path = Path::new(ct.cost_map.path_to(&current.key()));
                stats.discovered = ct.cost_map.len();
                debug!(
                    "Found path of cost {} after expanding {} cells",
                    path.cost(),
                    stats.expanded
                );
                return Ok(finish(path, stats, &ct));
            }
            self.check_budget(stats.expanded, started)?;
            ct.visited.add(current.key());
            stats.expanded += 1;
            trace!("Expanding {} with f = {}", current.cell(), current.f());

            let tentative_g = current.g() + STEP_COST;
            for neighbour in grid.neighbours(&current.cell()) {
                if ct.visited.contains(&neighbour) || !ct.cost_map.improves(&neighbour, tentative_g)
                {
                    continue;
                }
                ct.push(SearchNode::new(
                    neighbour,
                    current.orientation(),
                    tentative_g,
                    self.heuristic(&neighbour, &goal.cell),
                    Some(current.key()),
                ));
            }
        }
        stats.discovered = ct.cost_map.len();
        debug!(
            "No path from {} to {} after expanding {} cells",
            start.cell, goal.cell, stats.expanded
        );
        Ok(finish(Path::default(), stats, &ct))
    }

    fn check_budget(&self, expanded: usize, started: Instant) -> Result<()> {
        let out_of_steps = self.config.max_expansions.map_or(false, |max| expanded >= max);
        let out_of_time = self
            .config
            .time_budget
            .map_or(false, |budget| started.elapsed() >= budget);
        if out_of_steps || out_of_time {
            warn!("Search budget exhausted after expanding {} cells", expanded);
            return Err(PlanError::Aborted { expanded });
        }
        Ok(())
    }
}

fn finish(path: Path, stats: SearchStats, ct: &SearchContext) -> Plan {
    Plan {
        path,
        stats,
        explored: ct.cost_map.iter().map(|node| node.cell()).collect(),
    }
}

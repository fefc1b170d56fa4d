use crate::grid::{Cell, OccupancyGrid};
use crate::node::SearchNode;

pub mod cost_map;
pub mod frontier;
pub mod visited;

use cost_map::CostMap;
use frontier::Frontier;
use visited::VisitedSet;

/// Lifecycle of a cell during one search. Cells only ever move forward through these states:
/// a closed cell is never reopened because every step costs the same.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellState {
    Unseen,
    Open,
    Closed,
}

/// The containers of a single search. Built fresh for every query and dropped with it.
pub struct SearchContext {
    pub frontier: Frontier,
    pub visited: VisitedSet,
    pub cost_map: CostMap,
}

impl SearchContext {
    pub fn new(grid: &OccupancyGrid) -> SearchContext {
        let capacity = grid.len().min(1 << 12);
        SearchContext {
            frontier: Frontier::with_capacity(capacity),
            visited: VisitedSet::for_grid(grid),
            cost_map: CostMap::with_capacity(capacity),
        }
    }

    /// Registers `node` as the best route to its cell and schedules it for expansion.
    pub fn push(&mut self, node: SearchNode) {
        self.cost_map.put(node);
        self.frontier.insert(node);
    }

    /// True if a better route to the node's cell has been recorded since it was queued, or the
    /// cell has already been expanded.
    pub fn is_stale(&self, node: &SearchNode) -> bool {
        self.visited.contains(&node.key())
            || self
                .cost_map
                .get(&node.key())
                .map_or(false, |best| best.g() < node.g())
    }

    pub fn cell_state(&self, cell: &Cell) -> CellState {
        if self.visited.contains(cell) {
            CellState::Closed
        } else if self.cost_map.contains(cell) {
            CellState::Open
        } else {
            CellState::Unseen
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Orientation;

    #[test]
    fn cell_state_transitions() {
        let grid = OccupancyGrid::new(2, 2);
        let mut ct = SearchContext::new(&grid);
        let cell = Cell::new(0, 1);
        assert_eq!(ct.cell_state(&cell), CellState::Unseen);
        ct.push(SearchNode::new(cell, Orientation::North, 1, 1, None));
        assert_eq!(ct.cell_state(&cell), CellState::Open);
        ct.visited.add(cell);
        assert_eq!(ct.cell_state(&cell), CellState::Closed);
    }

    #[test]
    fn superseded_entries_are_stale() {
        let grid = OccupancyGrid::new(3, 3);
        let mut ct = SearchContext::new(&grid);
        let cell = Cell::new(2, 2);
        let worse = SearchNode::new(cell, Orientation::North, 4, 0, Some(Cell::new(2, 1)));
        let better = SearchNode::new(cell, Orientation::North, 2, 0, Some(Cell::new(1, 2)));
        ct.push(worse);
        assert!(!ct.is_stale(&worse));
        ct.push(better);
        assert!(ct.is_stale(&worse));
        assert!(!ct.is_stale(&better));
        assert_eq!(ct.frontier.len(), 2);
        ct.visited.add(cell);
        assert!(ct.is_stale(&better));
    }
}

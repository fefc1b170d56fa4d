use crate::grid::Cell;

/// Heading of the agent. It travels with queries and search nodes but takes no part in
/// equality, the heuristic or the successor relation: no turning cost is modelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    North,
    East,
    South,
    West,
}

/// A start or goal query: a cell plus the heading of the agent there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RobotState {
    pub cell: Cell,
    pub orientation: Orientation,
}

impl RobotState {
    /// A state facing [Orientation::North].
    pub fn new(row: i32, col: i32) -> RobotState {
        RobotState::with_orientation(row, col, Orientation::default())
    }
    pub fn with_orientation(row: i32, col: i32, orientation: Orientation) -> RobotState {
        RobotState {
            cell: Cell::new(row, col),
            orientation,
        }
    }
    pub fn row(&self) -> i32 {
        self.cell.row
    }
    pub fn col(&self) -> i32 {
        self.cell.col
    }
}

impl From<Cell> for RobotState {
    fn from(cell: Cell) -> RobotState {
        RobotState {
            cell,
            orientation: Orientation::default(),
        }
    }
}

/// Search state of a single cell. Nodes are never modified once built; a cheaper route to a
/// cell produces a new node.
///
/// [SearchNode] deliberately does not implement [PartialEq]: two nodes describe the same cell
/// whenever their [key](SearchNode::key) matches, whatever their costs or orientation.
#[derive(Copy, Clone, Debug)]
pub struct SearchNode {
    cell: Cell,
    orientation: Orientation,
    g: u32,
    h: u32,
    predecessor: Option<Cell>,
}

impl SearchNode {
    pub fn new(
        cell: Cell,
        orientation: Orientation,
        g: u32,
        h: u32,
        predecessor: Option<Cell>,
    ) -> SearchNode {
        SearchNode {
            cell,
            orientation,
            g,
            h,
            predecessor,
        }
    }
    /// Node for the start of a search: zero cost and no predecessor.
    pub fn root(state: &RobotState, h: u32) -> SearchNode {
        SearchNode::new(state.cell, state.orientation, 0, h, None)
    }
    /// Identity used by the visited set and the cost map.
    #[inline]
    pub fn key(&self) -> Cell {
        self.cell
    }
    pub fn same_cell(&self, other: &SearchNode) -> bool {
        self.key() == other.key()
    }
    pub fn cell(&self) -> Cell {
        self.cell
    }
    pub fn row(&self) -> i32 {
        self.cell.row
    }
    pub fn col(&self) -> i32 {
        self.cell.col
    }
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Cost of the best known route from the start.
    pub fn g(&self) -> u32 {
        self.g
    }
    /// Heuristic estimate of the remaining cost to the goal.
    pub fn h(&self) -> u32 {
        self.h
    }
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
    pub fn predecessor(&self) -> Option<Cell> {
        self.predecessor
    }
}

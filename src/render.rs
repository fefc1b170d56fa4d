use core::fmt;

use crate::grid::{Cell, OccupancyGrid};
use crate::planner::Path;

/// Text view of a grid with a path drawn over it. Each cell is printed as a symbol followed by
/// a space: `S` start, `G` goal, `*` path, `.` free and `?` obstacle.
pub struct PathOverlay<'a> {
    pub grid: &'a OccupancyGrid,
    pub start: Cell,
    pub goal: Cell,
    pub path: &'a Path,
}

impl<'a> PathOverlay<'a> {
    pub fn new(
        grid: &'a OccupancyGrid,
        start: Cell,
        goal: Cell,
        path: &'a Path,
    ) -> PathOverlay<'a> {
        PathOverlay {
            grid,
            start,
            goal,
            path,
        }
    }
    fn symbol(&self, cell: Cell) -> char {
        if cell == self.start {
            'S'
        } else if cell == self.goal {
            'G'
        } else if !self.grid.can_move_to(cell) {
            '?'
        } else if self.path.contains(&cell) {
            '*'
        } else {
            '.'
        }
    }
}

impl fmt::Display for PathOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in 0..self.grid.rows() as i32 {
            for col in 0..self.grid.cols() as i32 {
                write!(f, "{} ", self.symbol(Cell::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use crate::grid::{Cell, OccupancyGrid};

/// Closed set of the search: one flag per grid cell, looked up by `(row, col)`.
#[derive(Clone, Debug, Default)]
pub struct VisitedSet {
    rows: usize,
    cols: usize,
    closed: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    pub fn new(rows: usize, cols: usize) -> VisitedSet {
        VisitedSet {
            rows,
            cols,
            closed: vec![false; rows * cols],
            count: 0,
        }
    }
    pub fn for_grid(grid: &OccupancyGrid) -> VisitedSet {
        VisitedSet::new(grid.rows(), grid.cols())
    }
    fn index(&self, cell: &Cell) -> Option<usize> {
        let in_bounds = cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols;
        in_bounds.then(|| cell.row as usize * self.cols + cell.col as usize)
    }
    /// Marks a cell as finalized. Returns true if it was not marked before; cells outside the
    /// grid are never stored.
    pub fn add(&mut self, cell: Cell) -> bool {
        match self.index(&cell) {
            Some(ix) if !self.closed[ix] => {
                self.closed[ix] = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }
    pub fn contains(&self, cell: &Cell) -> bool {
        self.index(cell).map_or(false, |ix| self.closed[ix])
    }
    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut visited = VisitedSet::new(2, 2);
        assert!(visited.add(Cell::new(1, 0)));
        assert!(!visited.add(Cell::new(1, 0)));
        assert!(visited.contains(&Cell::new(1, 0)));
        assert!(!visited.contains(&Cell::new(0, 1)));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn ignores_cells_off_the_grid() {
        let mut visited = VisitedSet::new(2, 2);
        assert!(!visited.add(Cell::new(-1, 0)));
        assert!(!visited.add(Cell::new(0, 2)));
        assert!(!visited.contains(&Cell::new(-1, 0)));
        assert!(visited.is_empty());
    }
}

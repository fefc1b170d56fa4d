use core::fmt;
use petgraph::unionfind::UnionFind;
use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;

use crate::N_SMALLVEC_SIZE;

/// Row and column offsets of the 4-neighbourhood in expansion order: up, left, down, right.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// A grid coordinate. Coordinates are signed so that positions just outside the grid can be
/// expressed; such cells are simply never valid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }
    /// Saturates at [u32::MAX] for cells at opposite ends of the coordinate range.
    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }
    /// [None] if the shifted cell does not fit in the coordinate range.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Cell> {
        Some(Cell::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }
    /// The cardinal neighbours in expansion order, without any bounds checking. Neighbours that
    /// would overflow the coordinate range are left out.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| self.offset(dr, dc))
            .collect()
    }
    /// True if the two cells differ by exactly one unit along exactly one axis.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Cell {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("obstacle density {0} is outside [0, 1]")]
    InvalidDensity(f64),
    #[error("map is empty")]
    EmptyMap,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown map character {ch:?} at ({row}, {col})")]
    UnknownTile { ch: char, row: usize, col: usize },
}

/// [OccupancyGrid] stores a row-major [bool] occupancy map where [true] marks an obstacle.
/// In addition it maintains connected components of the free cells in a [UnionFind] so that
/// unreachable goals can be rejected without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for OccupancyGrid {
    fn default() -> OccupancyGrid {
        OccupancyGrid::new(0, 0)
    }
}

impl OccupancyGrid {
    /// Creates a grid with every cell free.
    pub fn new(rows: usize, cols: usize) -> OccupancyGrid {
        OccupancyGrid::filled(rows, cols, false)
    }
    pub fn filled(rows: usize, cols: usize, blocked: bool) -> OccupancyGrid {
        let mut grid = OccupancyGrid {
            rows,
            cols,
            blocked: vec![blocked; rows * cols],
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    /// Parses a map with one line per row. `.`, `S` and `G` are free cells, `#` and `?` are
    /// obstacles. Leading and trailing blank lines are ignored.
    pub fn from_ascii(text: &str) -> Result<OccupancyGrid, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let cols = lines.first().map(|l| l.chars().count()).ok_or(GridError::EmptyMap)?;
        let mut grid = OccupancyGrid::new(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let blocked = match ch {
                    '.' | 'S' | 'G' => false,
                    '#' | '?' => true,
                    _ => return Err(GridError::UnknownTile { ch, row, col }),
                };
                grid.blocked[row * cols + col] = blocked;
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }
    /// A cell can be occupied by the agent if it lies on the grid and is not an obstacle.
    pub fn is_valid_cell(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col) && !self.blocked[self.compute_ix(row, col)]
    }
    pub fn can_move_to(&self, cell: Cell) -> bool {
        self.is_valid_cell(cell.row, cell.col)
    }
    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, cell: Cell) -> bool {
        !self.in_bounds(cell.row, cell.col) || self.blocked[self.get_ix(&cell)]
    }
    /// Row-major index of a cell. Only meaningful for in-bounds cells.
    pub fn get_ix(&self, cell: &Cell) -> usize {
        self.compute_ix(cell.row, cell.col)
    }
    fn compute_ix(&self, row: i32, col: i32) -> usize {
        row as usize * self.cols + col as usize
    }
    pub fn len(&self) -> usize {
        self.blocked.len()
    }
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }
    pub fn free_cells(&self) -> usize {
        self.blocked.iter().filter(|b| !**b).count()
    }
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// Valid neighbours of `cell` in expansion order (up, left, down, right).
    pub fn neighbours(&self, cell: &Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        cell.neumann_neighborhood()
            .into_iter()
            .filter(|n| self.can_move_to(*n))
            .collect()
    }

    /// Updates a cell on the grid and returns whether it lies on the grid. Joins newly connected
    /// components and flags the components as dirty if they are (potentially) broken apart.
    pub fn set(&mut self, cell: Cell, blocked: bool) -> bool {
        if !self.in_bounds(cell.row, cell.col) {
            return false;
        }
        let ix = self.get_ix(&cell);
        if self.blocked[ix] == blocked {
            return true;
        }
        self.blocked[ix] = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.neighbours(&cell) {
                let n_ix = self.get_ix(&n);
                self.components.union(ix, n_ix);
            }
        }
        true
    }

    /// Marks at most `floor(rows * cols * density)` distinct free cells as obstacles, drawing
    /// positions uniformly from `rng`. Cells that are already blocked are not counted again, so on
    /// a partly blocked grid fewer cells may be placed; the number placed is returned.
    pub fn place_random_obstacles<R: Rng + ?Sized>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<usize, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }
        let target = ((self.len() as f64 * density) as usize).min(self.free_cells());
        let mut placed = 0;
        while placed < target {
            let cell = Cell::new(
                rng.gen_range(0..self.rows) as i32,
                rng.gen_range(0..self.cols) as i32,
            );
            if !self.is_blocked(cell) {
                self.set(cell, true);
                placed += 1;
            }
        }
        self.update();
        Ok(placed)
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> usize {
        self.components.find(self.get_ix(cell))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            !self.components.equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free grid neighbours to the same
    /// components. Only the down and right neighbours are visited since the relation is symmetric.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let cell = Cell::new(row, col);
                if !self.can_move_to(cell) {
                    continue;
                }
                let parent_ix = self.get_ix(&cell);
                for n in [cell.offset(1, 0), cell.offset(0, 1)].into_iter().flatten() {
                    if self.can_move_to(n) {
                        let ix = self.get_ix(&n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in 0..self.rows {
            let values = self.blocked[row * self.cols..(row + 1) * self.cols]
                .iter()
                .map(|b| *b as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

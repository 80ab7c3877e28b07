use crate::error::{GridError, Result};
use crate::{Cost, N_NEIGHBOURS};
use num_traits::NumCast;
use smallvec::SmallVec;

/// Row and column offsets of the 4-neighbourhood in the order up, down, left, right.
/// Search tie-breaking depends on this order.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Index arithmetic over a `rows` x `cols` grid stored in row-major order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridIndex {
    rows: usize,
    cols: usize,
    cell_size: f32,
}

impl GridIndex {
    pub fn new(rows: usize, cols: usize, cell_size: f32) -> Result<GridIndex> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        Ok(GridIndex {
            rows,
            cols,
            cell_size,
        })
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }
    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
    /// Always false, a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn contains(&self, index: usize) -> bool {
        index < self.len()
    }
    /// The caller guarantees `row < rows` and `col < cols`.
    pub fn to_index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }
    pub fn to_row_col(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }
    /// In-bounds orthogonal neighbours of `index`. Obstacles and search state are not
    /// considered here.
    pub fn neighbors(&self, index: usize) -> SmallVec<[usize; N_NEIGHBOURS]> {
        let (row, col) = self.to_row_col(index);
        DIRECTIONS
            .iter()
            .map(|&(dr, dc)| (row as isize + dr, col as isize + dc))
            .filter(|&(r, c)| self.in_bounds(r, c))
            .map(|(r, c)| self.to_index(r as usize, c as usize))
            .collect()
    }
    /// Distance between two cells in orthogonal steps.
    pub fn manhattan_distance(&self, a: usize, b: usize) -> usize {
        let (row_a, col_a) = self.to_row_col(a);
        let (row_b, col_b) = self.to_row_col(b);
        row_a.abs_diff(row_b) + col_a.abs_diff(col_b)
    }
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.manhattan_distance(a, b) == 1
    }
    /// Manhattan distance scaled by the move cost. Saturates at the maximum of `C`.
    pub fn heuristic<C: Cost>(&self, a: usize, b: usize, move_cost: C) -> C {
        steps_cost(self.manhattan_distance(a, b), move_cost)
    }
    /// World position of the lower-left corner of a cell.
    pub fn index_to_world(&self, index: usize) -> (f32, f32) {
        let (row, col) = self.to_row_col(index);
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }
    /// Cell containing a world position, or [None] outside the grid.
    pub fn world_to_index(&self, x: f32, y: f32) -> Option<usize> {
        let col = (x / self.cell_size).floor();
        let row = (y / self.cell_size).floor();
        // Written so that NaN falls through to None
        if !(col >= 0.0 && row >= 0.0 && col < self.cols as f32 && row < self.rows as f32) {
            return None;
        }
        Some(self.to_index(row as usize, col as usize))
    }
}

/// Cost of `steps` moves, saturating instead of overflowing.
pub(crate) fn steps_cost<C: Cost>(steps: usize, move_cost: C) -> C {
    <C as NumCast>::from(steps)
        .and_then(|s| s.checked_mul(&move_cost))
        .unwrap_or_else(C::max_value)
}

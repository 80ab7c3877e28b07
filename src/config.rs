use crate::error::{GridError, Result};
use crate::{Cost, GridIndex, CELL_SIZE, GRID_COLS, GRID_ROWS, MOVE_COST};

/// Parameters fixed for the lifetime of a [PathFinder](crate::PathFinder).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig<C = i32> {
    pub rows: usize,
    pub cols: usize,
    /// World size of a cell, only relevant for coordinate mapping.
    pub cell_size: f32,
    /// Uniform cost of moving between orthogonally adjacent cells.
    pub move_cost: C,
}

impl Default for GridConfig<i32> {
    fn default() -> GridConfig<i32> {
        GridConfig {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            cell_size: CELL_SIZE,
            move_cost: MOVE_COST,
        }
    }
}

impl<C: Cost> GridConfig<C> {
    pub fn new(rows: usize, cols: usize, move_cost: C) -> GridConfig<C> {
        GridConfig {
            rows,
            cols,
            cell_size: CELL_SIZE,
            move_cost,
        }
    }

    /// Returns the first rule the configuration violates.
    pub fn validate(&self) -> Result<()> {
        self.grid_index().map(|_| ())
    }

    /// Validates the configuration and builds the matching [GridIndex].
    pub fn grid_index(&self) -> Result<GridIndex> {
        let grid = GridIndex::new(self.rows, self.cols, self.cell_size)?;
        if self.move_cost <= C::zero() {
            return Err(GridError::InvalidMoveCost);
        }
        Ok(grid)
    }
}

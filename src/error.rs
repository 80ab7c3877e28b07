//! Error types for grid construction and queries.

use thiserror::Error;

/// Errors raised by [GridIndex](crate::GridIndex) and [PathFinder](crate::PathFinder).
///
/// A search that finds no path is not an error: it yields `Ok(None)`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("invalid cell size {0}, expected a positive finite value")]
    InvalidCellSize(f32),

    #[error("move cost must be positive")]
    InvalidMoveCost,

    #[error("cell index {index} out of range for a grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cell {index} is an obstacle and cannot be a path endpoint")]
    BlockedEndpoint { index: usize },
}

pub type Result<T> = std::result::Result<T, GridError>;

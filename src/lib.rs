//! # grid_astar
//!
//! Shortest paths on a fixed-size, uniform-cost grid using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Cells are addressed by
//! their row-major index and connect to their four orthogonal neighbours; any cell
//! can be toggled into an obstacle. The heuristic is the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) scaled by the
//! move cost, which is admissible and consistent on such a grid, so returned paths
//! are always optimal.
//!
//! [Connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) are
//! kept alongside the cells to answer unreachable queries without flood-filling.
//!
//! ```
//! use grid_astar::PathFinder;
//!
//! let mut path_finder = PathFinder::new(10, 10, 10).unwrap();
//! path_finder.set_obstacle(1, true).unwrap();
//! let path = path_finder.execute(0, 11).unwrap().unwrap();
//! assert_eq!(path, vec![0, 10, 11]);
//! ```
pub mod cell;
pub mod config;
pub mod error;
pub mod frontier;
pub mod grid_index;
pub mod path_finder;

use num_traits::PrimInt;
use std::fmt::Debug;

pub use cell::Cell;
pub use config::GridConfig;
pub use error::GridError;
pub use frontier::{heap::HeapFrontier, scan::ScanFrontier, Frontier};
pub use grid_index::GridIndex;
pub use path_finder::{PathFinder, ScanPathFinder};

/// Number of rows of the reference grid.
pub const GRID_ROWS: usize = 10;
/// Number of columns of the reference grid.
pub const GRID_COLS: usize = 10;
/// Side length of a cell in world units. Only used for world coordinate mapping.
pub const CELL_SIZE: f32 = 0.5;
/// Cost of a single orthogonal move.
pub const MOVE_COST: i32 = 10;
/// Inline capacity of neighbour lists, matching the 4-neighbourhood.
pub const N_NEIGHBOURS: usize = 4;

/// Integer cost type used for `g`, `h` and the move cost. The maximum value of the type
/// doubles as the "not yet reached" sentinel.
pub trait Cost: PrimInt + Debug {}

impl<T: PrimInt + Debug> Cost for T {}

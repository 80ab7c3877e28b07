use core::fmt;

use itertools::Itertools;
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;

use crate::error::{GridError, Result};
use crate::frontier::{heap::HeapFrontier, scan::ScanFrontier, Frontier};
use crate::grid_index::steps_cost;
use crate::{Cell, Cost, GridConfig, GridIndex, CELL_SIZE};

/// A* search over a fixed grid of [Cell]s.
///
/// The cells are allocated once and reused by every search. Obstacle flags persist
/// until changed by the caller; the search fields of the cells describe the most
/// recent search and are reset automatically when the next one starts.
///
/// Connected components of free cells are tracked in a [UnionFind] so that queries
/// between disconnected cells return immediately. Freeing a cell joins components
/// in place; blocking one marks them dirty and they are regenerated before the next
/// query.
#[derive(Clone, Debug)]
pub struct PathFinder<C: Cost = i32, F: Frontier<C> = HeapFrontier<C>> {
    grid: GridIndex,
    move_cost: C,
    cells: Vec<Cell<C>>,
    frontier: F,
    /// Set while the cells hold state from a finished search.
    searched: bool,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

/// [PathFinder] using the insertion-ordered linear scan frontier.
pub type ScanPathFinder<C = i32> = PathFinder<C, ScanFrontier>;

impl<C: Cost> PathFinder<C> {
    /// Creates a `rows` x `cols` grid without obstacles using [CELL_SIZE].
    pub fn new(rows: usize, cols: usize, move_cost: C) -> Result<PathFinder<C>> {
        PathFinder::with_frontier(rows, cols, move_cost)
    }
}

impl<C: Cost, F: Frontier<C>> PathFinder<C, F> {
    /// Like [new](PathFinder::new) but with the frontier chosen through the type.
    pub fn with_frontier(rows: usize, cols: usize, move_cost: C) -> Result<PathFinder<C, F>> {
        PathFinder::from_config(&GridConfig {
            rows,
            cols,
            cell_size: CELL_SIZE,
            move_cost,
        })
    }

    pub fn from_config(config: &GridConfig<C>) -> Result<PathFinder<C, F>> {
        let grid = config.grid_index()?;
        let n = grid.len();
        let mut path_finder = PathFinder {
            grid,
            move_cost: config.move_cost,
            cells: (0..n).map(Cell::new).collect(),
            frontier: F::default(),
            searched: false,
            components: UnionFind::new(n),
            components_dirty: false,
        };
        path_finder.generate_components();
        Ok(path_finder)
    }

    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    pub fn move_cost(&self) -> C {
        self.move_cost
    }

    /// All cells in index order.
    pub fn cells(&self) -> &[Cell<C>] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Result<&Cell<C>> {
        self.check_index(index)?;
        Ok(&self.cells[index])
    }

    pub fn is_obstacle(&self, index: usize) -> Result<bool> {
        self.cell(index).map(|c| c.is_obstacle)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if self.grid.contains(index) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                index,
                len: self.grid.len(),
            })
        }
    }

    fn check_endpoint(&self, index: usize) -> Result<()> {
        if self.cell(index)?.is_obstacle {
            Err(GridError::BlockedEndpoint { index })
        } else {
            Ok(())
        }
    }

    /// Updates the obstacle flag of a cell. Joins newly connected components and flags
    /// the components as dirty if they are (potentially) broken apart.
    pub fn set_obstacle(&mut self, index: usize, blocked: bool) -> Result<()> {
        self.check_index(index)?;
        if self.cells[index].is_obstacle == blocked {
            return Ok(());
        }
        self.cells[index].is_obstacle = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            for n in self.grid.neighbors(index) {
                if !self.cells[n].is_obstacle {
                    self.components.union(index, n);
                }
            }
        }
        Ok(())
    }

    /// Flips the obstacle flag of a cell and returns the new value.
    pub fn toggle_obstacle(&mut self, index: usize) -> Result<bool> {
        let blocked = !self.is_obstacle(index)?;
        self.set_obstacle(index, blocked)?;
        Ok(blocked)
    }

    /// Resets the search state of every cell and empties the frontier. Obstacles are
    /// kept.
    pub fn clear(&mut self) {
        self.frontier.clear();
        for cell in &mut self.cells {
            cell.reset();
        }
        self.searched = false;
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for a {}x{} grid",
            self.grid.rows(),
            self.grid.cols()
        );
        let n = self.grid.len();
        self.components = UnionFind::new(n);
        self.components_dirty = false;
        for ix in 0..n {
            if self.cells[ix].is_obstacle {
                continue;
            }
            let (row, col) = self.grid.to_row_col(ix);
            // Linking right and down covers every edge once
            if col + 1 < self.grid.cols() && !self.cells[ix + 1].is_obstacle {
                self.components.union(ix, ix + 1);
            }
            if row + 1 < self.grid.rows() && !self.cells[ix + self.grid.cols()].is_obstacle {
                self.components.union(ix, ix + self.grid.cols());
            }
        }
    }

    /// Retrieves the component id of a cell.
    pub fn get_component(&mut self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        self.update();
        Ok(self.components.find(index))
    }

    /// Checks if start and target are on the same connected component.
    pub fn reachable(&mut self, start: usize, target: usize) -> Result<bool> {
        self.check_index(start)?;
        self.check_index(target)?;
        self.update();
        Ok(self.components.equiv(start, target))
    }

    /// Computes a minimum-cost path from `start` to `target`, both included.
    ///
    /// Returns `Ok(None)` if the target cannot be reached with the current obstacles.
    /// Both endpoints must be free cells, otherwise [GridError::BlockedEndpoint] is
    /// returned.
    pub fn execute(&mut self, start: usize, target: usize) -> Result<Option<Vec<usize>>> {
        self.check_endpoint(start)?;
        self.check_endpoint(target)?;
        self.prepare();
        if !self.components.equiv(start, target) {
            debug!("{} is not reachable from {}", target, start);
            return Ok(None);
        }
        let grid = self.grid;
        let move_cost = self.move_cost;
        let path = self.search(
            start,
            |ix| grid.heuristic(ix, target, move_cost),
            |ix| ix == target,
        );
        if path.is_none() {
            warn!(
                "{} is reachable from {} but could not be pathed to, are the components correct?",
                target, start
            );
        }
        Ok(path)
    }

    /// Computes a path from `start` to whichever of `targets` is cheapest to reach and
    /// returns that target along with the path.
    pub fn execute_any(
        &mut self,
        start: usize,
        targets: &[usize],
    ) -> Result<Option<(usize, Vec<usize>)>> {
        self.check_endpoint(start)?;
        for &target in targets {
            self.check_endpoint(target)?;
        }
        self.prepare();
        let reachable = targets
            .iter()
            .copied()
            .filter(|&t| self.components.equiv(start, t))
            .collect::<Vec<usize>>();
        if reachable.is_empty() {
            debug!("None of {:?} are reachable from {}", targets, start);
            return Ok(None);
        }
        let grid = self.grid;
        let move_cost = self.move_cost;
        let path = self.search(
            start,
            |ix| {
                reachable
                    .iter()
                    .map(|&t| grid.heuristic(ix, t, move_cost))
                    .min()
                    .unwrap_or_else(C::max_value)
            },
            |ix| reachable.contains(&ix),
        );
        Ok(path.and_then(|p| p.last().copied().map(|goal| (goal, p))))
    }

    /// Computes a path from `start` that ends on `target` or on one of its orthogonal
    /// neighbours, whichever is cheapest. Useful when the target itself is blocked.
    pub fn execute_approximate(
        &mut self,
        start: usize,
        target: usize,
    ) -> Result<Option<Vec<usize>>> {
        self.check_endpoint(start)?;
        self.check_index(target)?;
        self.prepare();
        if self.neighbours_unreachable(start, target) {
            debug!("No neighbours of {} are reachable from {}", target, start);
            return Ok(None);
        }
        let grid = self.grid;
        let move_cost = self.move_cost;
        Ok(self.search(
            start,
            |ix| steps_cost(grid.manhattan_distance(ix, target).saturating_sub(1), move_cost),
            |ix| grid.manhattan_distance(ix, target) <= 1,
        ))
    }

    /// Checks that neither the target nor any of its neighbours shares a component with
    /// the start.
    fn neighbours_unreachable(&self, start: usize, target: usize) -> bool {
        !std::iter::once(target)
            .chain(self.grid.neighbors(target))
            .any(|ix| !self.cells[ix].is_obstacle && self.components.equiv(start, ix))
    }

    /// Total cost of a contiguous path, or [None] if the path is empty or contains a
    /// step between non-adjacent cells.
    pub fn path_cost(&self, path: &[usize]) -> Option<C> {
        if path.is_empty() || path.iter().any(|&ix| !self.grid.contains(ix)) {
            return None;
        }
        if !path
            .iter()
            .tuple_windows()
            .all(|(&a, &b)| self.grid.is_adjacent(a, b))
        {
            return None;
        }
        Some(steps_cost(path.len() - 1, self.move_cost))
    }

    fn prepare(&mut self) {
        if self.searched {
            debug!("Resetting search state left by the previous search");
            self.clear();
        }
        self.update();
    }

    fn search<FH, FS>(
        &mut self,
        start: usize,
        mut heuristic: FH,
        mut success: FS,
    ) -> Option<Vec<usize>>
    where
        FH: FnMut(usize) -> C,
        FS: FnMut(usize) -> bool,
    {
        self.searched = true;
        let start_cell = &mut self.cells[start];
        start_cell.g = C::zero();
        start_cell.h = C::zero();
        start_cell.is_open = true;
        self.frontier.push(start_cell);

        while let Some(current) = self.frontier.pop_min(&self.cells) {
            if success(current) {
                return Some(self.reconstruct_path(current));
            }
            // Saturates at the unreached sentinel rather than wrapping
            let candidate_g = self.cells[current].g.saturating_add(self.move_cost);
            for n in self.grid.neighbors(current) {
                let neighbour = &mut self.cells[n];
                if neighbour.is_closed || neighbour.is_obstacle {
                    continue;
                }
                if candidate_g < neighbour.g || !neighbour.is_open {
                    neighbour.h = heuristic(n);
                    neighbour.g = candidate_g;
                    neighbour.parent = Some(current);
                    if neighbour.is_open {
                        self.frontier.decrease(neighbour);
                    } else {
                        neighbour.is_open = true;
                        self.frontier.push(neighbour);
                    }
                }
            }
            self.cells[current].is_closed = true;
        }
        None
    }

    /// Follows parent links back to the start. The walk is bounded by the cell count.
    fn reconstruct_path(&self, end: usize) -> Vec<usize> {
        let mut path = std::iter::successors(Some(end), |&ix| self.cells[ix].parent)
            .take(self.cells.len())
            .collect::<Vec<usize>>();
        path.reverse();
        path
    }
}

impl<C: Cost, F: Frontier<C>> fmt::Display for PathFinder<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for row in 0..self.grid.rows() {
            let values = (0..self.grid.cols())
                .map(|col| self.cells[self.grid.to_index(row, col)].is_obstacle as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}

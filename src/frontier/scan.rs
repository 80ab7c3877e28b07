use fxhash::FxBuildHasher;
use indexmap::IndexSet;

use super::Frontier;
use crate::{Cell, Cost};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Insertion-ordered open set searched linearly for the lowest `f`.
///
/// Among equal `f` values the cell that appears first in the set wins, and removal
/// keeps the order of the remaining cells, so expansion order is fully determined by
/// insertion order. Each pop is `O(n)` in the frontier size, which is fine for small
/// grids but grows quadratically with the number of cells.
#[derive(Clone, Debug, Default)]
pub struct ScanFrontier {
    open: FxIndexSet<usize>,
}

impl<C: Cost> Frontier<C> for ScanFrontier {
    fn push(&mut self, cell: &Cell<C>) {
        self.open.insert(cell.index);
    }

    // The scan always reads the current `f`, so there is nothing to update.
    fn decrease(&mut self, _: &Cell<C>) {}

    fn pop_min(&mut self, cells: &[Cell<C>]) -> Option<usize> {
        let (position, _) = self
            .open
            .iter()
            .enumerate()
            .min_by_key(|&(_, &ix)| cells[ix].f())?;
        self.open.shift_remove_index(position)
    }

    fn clear(&mut self) {
        self.open.clear();
    }

    fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::tests::{drain, open_cell};

    #[test]
    fn pops_lowest_f_first() {
        let mut cells = vec![open_cell(0, 10, 30), open_cell(1, 20, 0), open_cell(2, 0, 5)];
        let mut frontier = ScanFrontier::default();
        for cell in &cells {
            frontier.push(cell);
        }
        assert_eq!(drain(&mut frontier, &mut cells), vec![2, 1, 0]);
        assert!(Frontier::<i32>::is_empty(&frontier));
    }

    /// Equal `f` values resolve to insertion order, also after removals in the middle.
    #[test]
    fn ties_follow_insertion_order() {
        let mut cells = vec![
            open_cell(0, 10, 10),
            open_cell(1, 0, 0),
            open_cell(2, 20, 0),
            open_cell(3, 5, 15),
        ];
        let mut frontier = ScanFrontier::default();
        for ix in [3, 0, 1, 2] {
            frontier.push(&cells[ix]);
        }
        assert_eq!(drain(&mut frontier, &mut cells), vec![1, 3, 0, 2]);
    }

    #[test]
    fn reads_current_values() {
        let mut cells = vec![open_cell(0, 10, 10), open_cell(1, 15, 10)];
        let mut frontier = ScanFrontier::default();
        frontier.push(&cells[0]);
        frontier.push(&cells[1]);
        cells[1].g = 5;
        frontier.decrease(&cells[1]);
        assert_eq!(Frontier::<i32>::pop_min(&mut frontier, &cells), Some(1));
    }
}

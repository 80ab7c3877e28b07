use crate::Cost;

/// Per-cell state. Only `is_obstacle` persists across searches; everything else is
/// scratch state of the most recent search and is reset by
/// [PathFinder::clear](crate::PathFinder::clear).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell<C> {
    pub index: usize,
    /// Best known cost from the start, `C::max_value()` while unreached.
    pub g: C,
    /// Heuristic estimate to the target, set when the cell is relaxed.
    pub h: C,
    /// Set once the cell has entered the frontier. Not cleared on removal.
    pub is_open: bool,
    pub is_closed: bool,
    pub is_obstacle: bool,
    /// Index of the predecessor on the best known path.
    pub parent: Option<usize>,
}

impl<C: Cost> Cell<C> {
    pub(crate) fn new(index: usize) -> Cell<C> {
        Cell {
            index,
            g: C::max_value(),
            h: C::zero(),
            is_open: false,
            is_closed: false,
            is_obstacle: false,
            parent: None,
        }
    }

    pub fn f(&self) -> C {
        self.g.saturating_add(self.h)
    }

    /// Whether the last search assigned this cell a finite cost.
    pub fn is_reached(&self) -> bool {
        self.g != C::max_value()
    }

    pub(crate) fn reset(&mut self) {
        self.g = C::max_value();
        self.h = C::zero();
        self.is_open = false;
        self.is_closed = false;
        self.parent = None;
    }
}

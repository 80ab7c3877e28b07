//! Open-set strategies used by [PathFinder](crate::PathFinder).
//!
//! A frontier only stores cell indices; the `g` and `h` values it orders by live in
//! the cells, which are passed back in when the minimum is taken.
use crate::{Cell, Cost};
use core::fmt;

pub mod heap;
pub mod scan;

pub trait Frontier<C: Cost>: Default + Clone + fmt::Debug {
    /// Adds a newly opened cell.
    fn push(&mut self, cell: &Cell<C>);
    /// Notifies the frontier that an already open cell received a lower `g`.
    fn decrease(&mut self, cell: &Cell<C>);
    /// Removes and returns the open cell with the lowest `f`.
    fn pop_min(&mut self, cells: &[Cell<C>]) -> Option<usize>;
    fn clear(&mut self);
    /// May report false while only superseded entries remain; [pop_min](Self::pop_min)
    /// is authoritative.
    fn is_empty(&self) -> bool;
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::Frontier;
use crate::{Cell, Cost};

#[derive(Clone, Debug)]
struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
    seq: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lowest estimated cost first, then the deepest node, then the oldest entry
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Binary heap keyed by `f`, giving `O(log n)` pops.
///
/// Lowering the cost of an open cell pushes a second entry instead of updating the
/// old one; superseded entries are dropped when they reach the top.
#[derive(Clone, Debug)]
pub struct HeapFrontier<C> {
    to_see: BinaryHeap<SmallestCostHolder<C>>,
    seq: usize,
}

impl<C: Ord> Default for HeapFrontier<C> {
    fn default() -> HeapFrontier<C> {
        HeapFrontier {
            to_see: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<C: Cost> Frontier<C> for HeapFrontier<C> {
    fn push(&mut self, cell: &Cell<C>) {
        self.to_see.push(SmallestCostHolder {
            estimated_cost: cell.f(),
            cost: cell.g,
            index: cell.index,
            seq: self.seq,
        });
        self.seq += 1;
    }

    fn decrease(&mut self, cell: &Cell<C>) {
        self.push(cell);
    }

    fn pop_min(&mut self, cells: &[Cell<C>]) -> Option<usize> {
        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let cell = &cells[index];
            if cell.is_closed || cost > cell.g {
                continue;
            }
            return Some(index);
        }
        None
    }

    fn clear(&mut self) {
        self.to_see.clear();
        self.seq = 0;
    }

    fn is_empty(&self) -> bool {
        self.to_see.is_empty()
    }
}

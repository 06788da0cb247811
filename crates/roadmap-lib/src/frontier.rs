//! Priority-queue entries used by the weighted searches.
//!
//! Entries borrow the vertex they stand for and carry only the cost fields the
//! search needs. `BinaryHeap` is a max-heap, so the orderings below are reversed
//! to pop the cheapest entry first; equal keys pop in insertion order.

use std::cmp::Ordering;

use crate::vertex::Vertex;

#[derive(Copy, Clone, Debug)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Dijkstra frontier entry: a vertex and the cost accumulated to reach it.
#[derive(Clone, Debug)]
pub(crate) struct WeightedVertex<'g> {
    pub(crate) vertex: &'g Vertex,
    pub(crate) cost: f64,
    seq: u64,
}

impl<'g> WeightedVertex<'g> {
    pub(crate) fn new(vertex: &'g Vertex, cost: f64, seq: u64) -> Self {
        Self { vertex, cost, seq }
    }
}

impl PartialEq for WeightedVertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightedVertex<'_> {}

impl Ord for WeightedVertex<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        FloatOrd(other.cost)
            .cmp(&FloatOrd(self.cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for WeightedVertex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* frontier entry: accumulated cost plus the heuristic estimate to the goal.
#[derive(Clone, Debug)]
pub(crate) struct AStarVertex<'g> {
    pub(crate) vertex: &'g Vertex,
    pub(crate) cost: f64,
    pub(crate) heuristic: f64,
    seq: u64,
}

impl<'g> AStarVertex<'g> {
    pub(crate) fn new(vertex: &'g Vertex, cost: f64, heuristic: f64, seq: u64) -> Self {
        Self {
            vertex,
            cost,
            heuristic,
            seq,
        }
    }

    pub(crate) fn total(&self) -> f64 {
        self.cost + self.heuristic
    }
}

impl PartialEq for AStarVertex<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AStarVertex<'_> {}

impl Ord for AStarVertex<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        FloatOrd(other.total())
            .cmp(&FloatOrd(self.total()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarVertex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

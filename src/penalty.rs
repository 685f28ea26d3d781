//! Directed-edge penalty counters for guided search.

use crate::matrix::SquareMatrix;
use crate::tour::Tour;

/// Per-edge penalty counts, owned by one guided-search invocation.
///
/// Stored dense and row-major like the distance matrix; all counters start
/// at zero and only ever grow by the penalization step.
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyMatrix {
    counts: SquareMatrix<u32>,
}

impl PenaltyMatrix {
    pub fn new(size: usize) -> Self {
        PenaltyMatrix {
            counts: SquareMatrix::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.counts.size()
    }

    /// Penalty count of one directed edge.
    pub fn count(&self, from: usize, to: usize) -> u32 {
        self.counts.get(from, to)
    }

    /// Bump one directed edge by one.
    pub fn increment(&mut self, from: usize, to: usize) {
        let current = self.counts.get(from, to);
        self.counts.set(from, to, current.saturating_add(1));
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    /// Sum of the counts along a tour's cyclic edges.
    pub fn tour_total(&self, tour: &Tour) -> u64 {
        tour.edges()
            .map(|(from, to)| u64::from(self.count(from, to)))
            .sum()
    }
}

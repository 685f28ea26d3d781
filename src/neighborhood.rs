//! Pairwise-swap neighborhood generation.

use crate::tour::Tour;
use itertools::Itertools;

/// All tours reachable from `tour` by swapping two positions.
///
/// Ordered position pairs are enumerated, so each unordered swap shows up
/// twice and an `n`-node tour yields exactly `n * (n - 1)` candidates. The
/// duplicates cost a second evaluation per swap but leave the reachable
/// local optimum unchanged; the scan order below is what the
/// first-improvement search keys on.
pub fn swap_neighbors(tour: &Tour) -> Vec<Tour> {
    let n = tour.len();

    (0..n)
        .cartesian_product(0..n)
        .filter(|(i, j)| i != j)
        .map(|(i, j)| tour.swapped(i, j))
        .collect()
}

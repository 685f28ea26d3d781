//! Guided local search: penalty-driven escape from local optima.
//!
//! The penalty scheme follows Voudouris and Tsang's Guided Local Search.
//! A plain descent establishes a baseline; afterwards each round penalizes
//! the highest-utility edge of the starting tour and re-runs the descent
//! against the augmented score, hoping the changed landscape leads somewhere
//! the raw length alone could not.

use crate::config::SearchConfig;
use crate::instance::Instance;
use crate::local_search::LocalSearch;
use crate::penalty::PenaltyMatrix;
use crate::tour::Tour;
use log::debug;

/// Outcome of one guided search invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct GlsRun {
    /// Best tour seen, the baseline included.
    pub tour: Tour,
    /// Raw length of that tour.
    pub length: f64,
    /// Penalization rounds actually executed.
    pub iterations: usize,
}

/// Drives repeated penalized descents from a fixed starting tour.
pub struct GuidedLocalSearch {
    config: SearchConfig,
}

impl GuidedLocalSearch {
    pub fn new(config: SearchConfig) -> Self {
        GuidedLocalSearch { config }
    }

    /// Improve `start`, escaping local optima through edge penalties.
    ///
    /// A fresh zeroed penalty matrix is used per invocation. Every round
    /// starts over from `start` itself rather than the previous round's
    /// result, and the loop ends at the first candidate whose raw length
    /// beats the baseline: one successful escape is taken as-is instead of
    /// searching on for a better one.
    pub fn run(&self, instance: &Instance, start: &Tour) -> GlsRun {
        if start.len() != instance.size() {
            return GlsRun {
                tour: start.clone(),
                length: self.config.initial_record,
                iterations: 0,
            };
        }

        let mut penalties = PenaltyMatrix::new(instance.size());
        let search = LocalSearch::new(self.config.clone());

        let baseline = search.improve(instance, start);
        let mut best = baseline.tour;
        let mut best_length = best.length(instance);

        let mut iterations = 0;
        while iterations < self.config.max_guided_iterations {
            self.penalize(instance, start, &mut penalties);
            let round = search.improve_penalized(instance, start, &penalties);
            iterations += 1;

            let length = round.tour.length(instance);
            if length < best_length {
                debug!(
                    "penalized round {} improved {} -> {}",
                    iterations, best_length, length
                );
                best = round.tour;
                best_length = length;
                break;
            }
        }

        GlsRun {
            tour: best,
            length: best_length,
            iterations,
        }
    }

    /// Bump the penalty of the tour edge with the highest utility.
    ///
    /// Utility of an edge is the tour's length divided by one plus the
    /// edge's current penalty count, so untouched edges win first and ties
    /// go to the earliest edge in visiting order. Exactly one counter is
    /// incremented per call.
    pub fn penalize(&self, instance: &Instance, tour: &Tour, penalties: &mut PenaltyMatrix) {
        let length = tour.length(instance);

        let mut max_utility = 0.0;
        let mut selected = None;

        for (from, to) in tour.edges() {
            let utility = length / (1.0 + f64::from(penalties.count(from, to)));
            if utility > max_utility {
                max_utility = utility;
                selected = Some((from, to));
            }
        }

        if let Some((from, to)) = selected {
            penalties.increment(from, to);
        }
    }
}

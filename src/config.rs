//! Tuning constants for the search engines.

use serde::{Deserialize, Serialize};

/// Configuration shared by the local search and guided search engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Starting record value; any real tour is expected to score below it.
    /// Also returned unchanged when a search refuses an inconsistent tour.
    pub initial_record: f64,
    /// Upper bound on guided-search penalization rounds.
    pub max_guided_iterations: usize,
    /// Scaling factor applied to accumulated edge penalties in the
    /// augmented score.
    pub penalty_lambda: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            initial_record: 999_999.0,
            max_guided_iterations: 100,
            penalty_lambda: 100.0,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        SearchConfig::default()
    }

    /// Set the starting record value.
    pub fn with_initial_record(mut self, record: f64) -> Self {
        self.initial_record = record;
        self
    }

    /// Set the guided-search iteration budget.
    pub fn with_max_guided_iterations(mut self, iterations: usize) -> Self {
        self.max_guided_iterations = iterations;
        self
    }

    /// Set the penalty scaling factor.
    pub fn with_penalty_lambda(mut self, lambda: f64) -> Self {
        self.penalty_lambda = lambda;
        self
    }
}

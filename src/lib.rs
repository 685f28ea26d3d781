//! # GLS-TSP
//!
//! Local Search and Guided Local Search for the Traveling Salesman Problem.
//!
//! Instances come from TSPLIB-style files (an explicit full matrix or 2-D
//! coordinates, symmetric or not) and starting tours from a plain token
//! file. Plain local search hill-climbs each starting tour to a 1-swap
//! local optimum; guided local search layers adaptive edge penalties on top
//! of the same descent to push it out of optima the raw length alone cannot
//! leave. The whole search is deterministic: identical inputs always yield
//! identical tours.

pub mod config;
pub mod error;
pub mod guided;
pub mod instance;
pub mod local_search;
pub mod matrix;
pub mod neighborhood;
pub mod penalty;
pub mod solution;
pub mod tour;
pub mod utils;

use crate::config::SearchConfig;
use crate::guided::GuidedLocalSearch;
use crate::instance::Instance;
use crate::local_search::LocalSearch;
use crate::solution::{Algorithm, SolveResult};
use crate::tour::Tour;

use log::info;
use std::time::Instant;

/// The driver that runs a chosen algorithm over starting tours.
pub struct TspSolver {
    pub instance: Instance,
    pub config: SearchConfig,
}

impl TspSolver {
    /// Create a solver for the given instance and configuration.
    pub fn new(instance: Instance, config: SearchConfig) -> Self {
        TspSolver { instance, config }
    }

    /// Run `algorithm` once per starting tour and collect the results.
    pub fn solve(&self, algorithm: Algorithm, initial: &[Tour]) -> Vec<SolveResult> {
        initial
            .iter()
            .map(|start| self.solve_one(algorithm, start))
            .collect()
    }

    /// Improve a single starting tour, timing the run.
    ///
    /// The starting tour is copied; the caller's tour is never mutated.
    pub fn solve_one(&self, algorithm: Algorithm, start: &Tour) -> SolveResult {
        let timer = Instant::now();

        let (tour, length, iterations) = match algorithm {
            Algorithm::LocalSearch => {
                let run = LocalSearch::new(self.config.clone()).improve(&self.instance, start);
                (run.tour, run.score, run.scans)
            }
            Algorithm::GuidedLocalSearch => {
                let run = GuidedLocalSearch::new(self.config.clone()).run(&self.instance, start);
                (run.tour, run.length, run.iterations)
            }
        };

        let elapsed = timer.elapsed();
        info!(
            "{} finished: length {}, {} iterations, {} ms",
            algorithm,
            length,
            iterations,
            elapsed.as_millis()
        );

        SolveResult {
            algorithm,
            tour,
            length,
            iterations,
            elapsed,
        }
    }
}

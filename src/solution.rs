//! Per-tour solve results and algorithm selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::tour::Tour;

/// The search algorithms the driver can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    LocalSearch,
    GuidedLocalSearch,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::LocalSearch => write!(f, "LS"),
            Algorithm::GuidedLocalSearch => write!(f, "GLS"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LS" | "ls" => Ok(Algorithm::LocalSearch),
            "GLS" | "gls" => Ok(Algorithm::GuidedLocalSearch),
            _ => Err(UnknownAlgorithmError {
                name: s.to_string(),
            }),
        }
    }
}

/// An algorithm selector that names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithmError {
    pub name: String,
}

impl fmt::Display for UnknownAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {}", self.name)
    }
}

impl std::error::Error for UnknownAlgorithmError {}

/// What one solve call produced for one starting tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub algorithm: Algorithm,
    /// The improved tour.
    pub tour: Tour,
    /// Its final recorded length.
    pub length: f64,
    /// Scans (LS) or penalization rounds (GLS) performed.
    pub iterations: usize,
    /// Wall time spent inside the algorithm.
    pub elapsed: Duration,
}

//! Error types for instance and starting-tour parsing.

use std::fmt;
use std::io;

/// The error type for reading instances and starting-tour files.
#[derive(Debug)]
pub enum ParseError {
    /// The file could not be opened or read.
    Io(io::Error),
    /// A header value that must be numeric could not be parsed.
    InvalidHeader { key: String, value: String },
    /// A data section appeared before a positive DIMENSION header.
    MissingDimension { section: &'static str },
    /// A data section ran out of numeric tokens before it was filled.
    DimensionMismatch {
        section: &'static str,
        expected: usize,
        found: usize,
    },
    /// The starting-tour file held no complete tour.
    EmptyInitialSet,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::InvalidHeader { key, value } => {
                write!(f, "header {} has unparsable value '{}'", key, value)
            }
            Self::MissingDimension { section } => {
                write!(f, "{} reached before a positive DIMENSION", section)
            }
            Self::DimensionMismatch {
                section,
                expected,
                found,
            } => write!(
                f,
                "{} ended after {} of {} expected values",
                section, found, expected
            ),
            Self::EmptyInitialSet => write!(f, "no complete starting tour in input"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<io::Error> for ParseError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

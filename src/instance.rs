//! Problem instance model and TSPLIB-style file parsing.

use crate::error::ParseError;
use crate::matrix::SquareMatrix;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// Distance stored on the diagonal of coordinate-derived matrices.
/// The search never traverses a self-loop, so the value only has to be
/// large enough to lose against every real edge.
pub const DIAGONAL_SENTINEL: f64 = 9999.0;

/// The declared problem class of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProblemType {
    Tsp,
    Atsp,
    /// Header value missing or not recognized.
    #[default]
    Unspecified,
}

impl ProblemType {
    fn from_keyword(value: &str) -> Self {
        match value {
            "TSP" => ProblemType::Tsp,
            "ATSP" => ProblemType::Atsp,
            _ => ProblemType::Unspecified,
        }
    }
}

/// How edge weights are given or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeWeightType {
    Explicit,
    Euc2d,
    Att,
    /// Header value missing or not recognized.
    #[default]
    Unspecified,
}

impl EdgeWeightType {
    fn from_keyword(value: &str) -> Self {
        match value {
            "EXPLICIT" => EdgeWeightType::Explicit,
            "EUC_2D" => EdgeWeightType::Euc2d,
            "ATT" => EdgeWeightType::Att,
            _ => EdgeWeightType::Unspecified,
        }
    }
}

/// Layout of an explicit weight section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeWeightFormat {
    FullMatrix,
    /// Header value missing or not recognized.
    #[default]
    Unspecified,
}

impl EdgeWeightFormat {
    fn from_keyword(value: &str) -> Self {
        match value {
            "FULL_MATRIX" => EdgeWeightFormat::FullMatrix,
            _ => EdgeWeightFormat::Unspecified,
        }
    }
}

/// Data sections the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    EdgeWeights,
    NodeCoords,
}

impl Section {
    fn from_keyword(line: &str) -> Option<Self> {
        match line {
            "EDGE_WEIGHT_SECTION" => Some(Section::EdgeWeights),
            "NODE_COORD_SECTION" => Some(Section::NodeCoords),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Section::EdgeWeights => "EDGE_WEIGHT_SECTION",
            Section::NodeCoords => "NODE_COORD_SECTION",
        }
    }
}

/// A TSP instance: node count plus the full directed distance matrix.
///
/// Immutable once built; the search engines only ever read it, so a single
/// instance can back any number of solve calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    name: String,
    comment: String,
    problem_type: ProblemType,
    edge_weight_type: EdgeWeightType,
    edge_weight_format: EdgeWeightFormat,
    size: usize,
    distances: SquareMatrix<f64>,
}

impl Instance {
    /// Build an instance from an explicit distance matrix.
    pub fn from_matrix(name: &str, distances: SquareMatrix<f64>) -> Self {
        Instance {
            name: name.to_string(),
            comment: String::new(),
            problem_type: ProblemType::Unspecified,
            edge_weight_type: EdgeWeightType::Explicit,
            edge_weight_format: EdgeWeightFormat::FullMatrix,
            size: distances.size(),
            distances,
        }
    }

    /// Build an instance from 2-D coordinates, deriving the matrix pairwise.
    pub fn from_coordinates(
        name: &str,
        coordinates: &[(f64, f64)],
        edge_weight_type: EdgeWeightType,
    ) -> Self {
        let distances = matrix_from_coordinates(coordinates, edge_weight_type);
        Instance {
            name: name.to_string(),
            comment: String::new(),
            problem_type: ProblemType::Tsp,
            edge_weight_type,
            edge_weight_format: EdgeWeightFormat::Unspecified,
            size: coordinates.len(),
            distances,
        }
    }

    /// Load an instance from a TSPLIB-style file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let file = File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// Parse an instance from any buffered reader.
    ///
    /// Header lines are `KEY: VALUE`; unknown keys are skipped and
    /// unrecognized values map to the `Unspecified` sentinel of the matching
    /// enum. The `EDGE_WEIGHT_SECTION` and `NODE_COORD_SECTION` markers pull
    /// in the distance data, and a line reading `EOF` stops parsing.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut name = String::new();
        let mut comment = String::new();
        let mut problem_type = ProblemType::default();
        let mut edge_weight_type = EdgeWeightType::default();
        let mut edge_weight_format = EdgeWeightFormat::default();
        let mut size = 0usize;
        let mut distances = None;

        let mut lines = reader.lines();
        while let Some(line) = lines.next() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed == "EOF" {
                break;
            }

            if let Some(section) = Section::from_keyword(trimmed) {
                if size == 0 {
                    return Err(ParseError::MissingDimension {
                        section: section.name(),
                    });
                }
                distances = Some(match section {
                    Section::EdgeWeights => read_matrix(&mut lines, size)?,
                    Section::NodeCoords => read_node_coords(&mut lines, size, edge_weight_type)?,
                });
                continue;
            }

            if let Some((key, value)) = split_header(trimmed) {
                match key {
                    "NAME" => name = value.to_string(),
                    "COMMENT" => comment = value.to_string(),
                    "TYPE" => problem_type = ProblemType::from_keyword(value),
                    "DIMENSION" => {
                        size = value.parse().map_err(|_| ParseError::InvalidHeader {
                            key: key.to_string(),
                            value: value.to_string(),
                        })?;
                    }
                    "EDGE_WEIGHT_TYPE" => edge_weight_type = EdgeWeightType::from_keyword(value),
                    "EDGE_WEIGHT_FORMAT" => {
                        edge_weight_format = EdgeWeightFormat::from_keyword(value)
                    }
                    _ => {}
                }
            }
        }

        Ok(Instance {
            name,
            comment,
            problem_type,
            edge_weight_type,
            edge_weight_format,
            size,
            distances: distances.unwrap_or_else(|| SquareMatrix::new(size)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn problem_type(&self) -> ProblemType {
        self.problem_type
    }

    pub fn edge_weight_type(&self) -> EdgeWeightType {
        self.edge_weight_type
    }

    pub fn edge_weight_format(&self) -> EdgeWeightFormat {
        self.edge_weight_format
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Directed distance from one node to another.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }
}

fn split_header(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Pull `expected` numeric tokens off the remaining lines.
///
/// A token that fails to parse ends the numeric stream, so a short or
/// corrupted section reports how far it got.
fn read_values<R: BufRead>(
    lines: &mut io::Lines<R>,
    section: &'static str,
    expected: usize,
) -> Result<Vec<f64>, ParseError> {
    let mut values = Vec::with_capacity(expected);

    while values.len() < expected {
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(ParseError::DimensionMismatch {
                    section,
                    expected,
                    found: values.len(),
                })
            }
        };

        for token in line.split_whitespace() {
            if values.len() == expected {
                break;
            }
            match token.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    return Err(ParseError::DimensionMismatch {
                        section,
                        expected,
                        found: values.len(),
                    })
                }
            }
        }
    }

    Ok(values)
}

/// Read `size * size` weights, row-major.
fn read_matrix<R: BufRead>(
    lines: &mut io::Lines<R>,
    size: usize,
) -> Result<SquareMatrix<f64>, ParseError> {
    let values = read_values(lines, "EDGE_WEIGHT_SECTION", size * size)?;
    Ok(SquareMatrix::from_values(size, values))
}

/// Read `size` lines of `index x y` and derive the matrix pairwise.
fn read_node_coords<R: BufRead>(
    lines: &mut io::Lines<R>,
    size: usize,
    edge_weight_type: EdgeWeightType,
) -> Result<SquareMatrix<f64>, ParseError> {
    let values = read_values(lines, "NODE_COORD_SECTION", size * 3)?;

    let coordinates: Vec<(f64, f64)> = values
        .chunks_exact(3)
        .map(|entry| (entry[1], entry[2]))
        .collect();

    Ok(matrix_from_coordinates(&coordinates, edge_weight_type))
}

fn matrix_from_coordinates(
    coordinates: &[(f64, f64)],
    edge_weight_type: EdgeWeightType,
) -> SquareMatrix<f64> {
    let size = coordinates.len();
    let mut distances = SquareMatrix::new(size);

    for i in 0..size {
        for j in 0..size {
            let value = if i == j {
                DIAGONAL_SENTINEL
            } else {
                coordinate_distance(edge_weight_type, coordinates[i], coordinates[j])
            };
            distances.set(i, j, value);
        }
    }

    distances
}

/// Distance between two points under the given weight rule.
///
/// `ATT` is the pseudo-Euclidean TSPLIB variant: the squared distance is
/// scaled down by 10 before the root, and the result is rounded up whenever
/// plain rounding would undershoot the true value.
fn coordinate_distance(edge_weight_type: EdgeWeightType, a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;

    match edge_weight_type {
        EdgeWeightType::Att => {
            let r = ((dx * dx + dy * dy) / 10.0).sqrt();
            let rounded = r.round();
            if rounded < r {
                rounded + 1.0
            } else {
                rounded
            }
        }
        _ => (dx * dx + dy * dy).sqrt(),
    }
}

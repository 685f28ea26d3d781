//! Cyclic tour representation and starting-tour parsing.

use crate::error::ParseError;
use crate::instance::Instance;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// An ordered sequence of node indices visited as a cycle.
///
/// A well-formed tour over an `n`-node instance is a permutation of
/// `0..n`; [`Tour::is_permutation`] checks that, the constructors do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    pub fn new(nodes: Vec<usize>) -> Self {
        Tour { nodes }
    }

    /// The visiting order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when every index in `0..size` appears exactly once.
    pub fn is_permutation(&self, size: usize) -> bool {
        if self.nodes.len() != size {
            return false;
        }
        let mut seen = vec![false; size];
        for &node in &self.nodes {
            if node >= size || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// A copy of this tour with the nodes at positions `i` and `j` swapped.
    pub fn swapped(&self, i: usize, j: usize) -> Tour {
        let mut nodes = self.nodes.clone();
        nodes.swap(i, j);
        Tour { nodes }
    }

    /// The directed edges of the cycle, wrapping from the last node back to
    /// the first.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.nodes.len();
        (0..n).map(move |i| (self.nodes[i], self.nodes[(i + 1) % n]))
    }

    /// Total cyclic length of the tour under the instance's distances.
    pub fn length(&self, instance: &Instance) -> f64 {
        self.edges()
            .map(|(from, to)| instance.distance(from, to))
            .sum()
    }

    /// Load starting tours from a file, `size` values per tour.
    pub fn read_file<P: AsRef<Path>>(path: P, size: usize) -> Result<Vec<Tour>, ParseError> {
        let file = File::open(path)?;
        Self::read(io::BufReader::new(file), size)
    }

    /// Parse starting tours from any buffered reader.
    ///
    /// Whitespace-separated numeric tokens are consumed in groups of `size`;
    /// the first unparsable token ends the stream and a trailing partial
    /// group is dropped. Zero complete tours is an error.
    pub fn read<R: BufRead>(reader: R, size: usize) -> Result<Vec<Tour>, ParseError> {
        let mut values: Vec<usize> = Vec::new();

        'read: for line in reader.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                match token.parse::<f64>() {
                    Ok(value) => values.push(value as usize),
                    Err(_) => break 'read,
                }
            }
        }

        if size == 0 {
            return Err(ParseError::EmptyInitialSet);
        }

        let tours: Vec<Tour> = values
            .chunks_exact(size)
            .map(|group| Tour::new(group.to_vec()))
            .collect();

        if tours.is_empty() {
            return Err(ParseError::EmptyInitialSet);
        }

        Ok(tours)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.iter().join(" "))
    }
}

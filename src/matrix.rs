//! Flat row-major square matrices.

use serde::{Deserialize, Serialize};

/// A dense `n x n` matrix stored as a single row-major buffer.
///
/// Sized once at construction; the search never resizes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Copy + Default> SquareMatrix<T> {
    /// Create a matrix of the given side length with all cells defaulted.
    pub fn new(size: usize) -> Self {
        SquareMatrix {
            data: vec![T::default(); size * size],
            size,
        }
    }

    /// Build a matrix from row-major values.
    ///
    /// Panics if `values` does not hold exactly `size * size` entries.
    pub fn from_values(size: usize, values: Vec<T>) -> Self {
        assert_eq!(values.len(), size * size);
        SquareMatrix { data: values, size }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.size + col] = value;
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

// error.rs - Errors raised while building grids

use std::fmt;

/// Errors raised while building a grid from outside input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A grid needs at least one row and one column
    EmptyDimensions { rows: usize, cols: usize },
    /// A parsed row has a different width than the first one
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A parsed row contains something other than a cell marker
    InvalidCell { row: usize, col: usize, found: char },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::EmptyDimensions { rows, cols } => {
                write!(f, "grid dimensions {}x{} must both be non-zero", rows, cols)
            }
            LifeError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            LifeError::InvalidCell { row, col, found } => {
                write!(f, "invalid cell marker {:?} at ({}, {})", found, row, col)
            }
        }
    }
}

impl std::error::Error for LifeError {}

pub type Result<T> = std::result::Result<T, LifeError>;

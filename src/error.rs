use std::fmt;

/// Precondition violations reported by `PercolationGrid`
///
/// Validation always runs before any mutation, so a returned error means the
/// grid is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    /// Grid dimension is not positive, or `n * n` does not fit in memory indices
    InvalidSize { n: i64 },
    /// `row` or `col` lies outside `1..=n`
    InvalidCoordinate { row: i64, col: i64, n: i64 },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::InvalidSize { n } => {
                write!(f, "Invalid grid size {n}: must be a positive integer")
            }
            PercolationError::InvalidCoordinate { row, col, n } => {
                write!(
                    f,
                    "Invalid coordinate ({row}, {col}): row and col must be in 1..={n}"
                )
            }
        }
    }
}

impl std::error::Error for PercolationError {}

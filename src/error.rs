use std::error::Error;
use std::fmt;

/// Errors raised while assembling the solve pipeline.
///
/// A successful search that finds no tiling is not represented here — see
/// the distinction drawn in the crate's top-level documentation between
/// "setup failed" and "no solution exists".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A compiled-in piece resource decoded to zero rows.
    EmptyShape { letter: char },
    /// A compiled-in piece resource decoded to a shape that fails the
    /// basic well-formedness invariants (non-zero top row, non-zero
    /// leftmost column, popcount of five, 1..=5 rows).
    NonRectangularShape { letter: char, reason: &'static str },
    /// A cell index was requested outside the board or at an inactive cell.
    InvalidCell { row: usize, col: usize },
    /// The renderer was asked to paint a cell outside the board; this can
    /// only happen if the matrix itself is corrupt.
    PlacementOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::EmptyShape { letter } => {
                write!(f, "piece '{letter}' decoded to an empty shape")
            }
            SolveError::NonRectangularShape { letter, reason } => {
                write!(f, "piece '{letter}' has a malformed shape: {reason}")
            }
            SolveError::InvalidCell { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the board or inactive")
            }
            SolveError::PlacementOutOfBounds { row, col } => {
                write!(f, "render attempted to paint out-of-bounds cell ({row}, {col})")
            }
        }
    }
}

impl Error for SolveError {}

pub type Result<T> = std::result::Result<T, SolveError>;

// error.rs - Failures reported by the grid engine

use thiserror::Error;

/// Errors raised when a grid is built from malformed input or queried outside
/// its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A coordinate lies outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    Range {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// The requested dimensions hold more cells than `usize` can count.
    #[error("a {rows}x{cols} grid is too large")]
    Size { rows: usize, cols: usize },
    /// A token in textual input is not a cell value.
    #[error("line {line}: invalid cell value {token:?}")]
    Parse { line: usize, token: String },
}

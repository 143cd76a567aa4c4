//! Errors raised while building grids

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid cannot be empty")]
    Empty,

    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("pattern '{name}' ({height}x{width}) does not fit a {rows}x{cols} grid at ({row}, {col})")]
    PatternDoesNotFit {
        name: &'static str,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
        row: usize,
        col: usize,
    },
}

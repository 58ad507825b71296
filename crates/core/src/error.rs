//! Error types for board construction.

use thiserror::Error;

use crate::types::Cell;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have at least one row and one column (got {width}x{height})")]
    EmptyDimension { width: usize, height: usize },
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("cell ({row}, {col}) holds {value}, which is neither empty nor a power of two")]
    InvalidTile { row: usize, col: usize, value: Cell },
    #[error("target {target} must be a power of two of at least 4")]
    InvalidTarget { target: Cell },
}

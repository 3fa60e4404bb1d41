//! Errors raised while building or editing grids

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid cannot be empty")]
    EmptyGrid,

    #[error("Grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("Row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("Coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Grid dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid character '{ch}' at position ({x}, {y}). Only '0' and '1' are allowed")]
    InvalidCharacter { ch: char, x: usize, y: usize },

    #[error("{width}x{height} grid needs {} cells, got {actual}", width.saturating_mul(*height))]
    CellCountMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("A {pattern_width}x{pattern_height} pattern at ({x}, {y}) does not fit in a {width}x{height} grid")]
    PatternTooLarge {
        pattern_width: usize,
        pattern_height: usize,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),
}

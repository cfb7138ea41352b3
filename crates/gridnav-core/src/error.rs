//! Error types for costmap construction and parsing.

use thiserror::Error;

/// Errors raised when building or parsing a costmap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostmapError {
    /// The cost slice does not hold `width * height` cells.
    #[error("cost data holds {len} cells, expected {width}x{height} = {expected}")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
        expected: usize,
    },

    /// Width or height is zero.
    #[error("costmap dimensions must be non-zero")]
    ZeroDimension,

    /// An ASCII map line differs in width from the first line.
    #[error("map line {line} is {actual} cells wide, expected {expected}")]
    RaggedLine {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// An ASCII map contains a character with no cost mapping.
    #[error("unknown map glyph {glyph:?} on line {line}")]
    UnknownGlyph { glyph: char, line: usize },
}

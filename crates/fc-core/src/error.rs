//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::GridPos;

/// Errors raised while validating a [`FestivalConfig`][crate::FestivalConfig].
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("stand position {0} is listed more than once")]
    DuplicateStand(GridPos),

    #[error("position {pos} lies outside the {width}x{height} grid")]
    OutOfBounds { pos: GridPos, width: u32, height: u32 },

    #[error("{what} must be a probability in [0, 1], got {value}")]
    Probability { what: &'static str, value: f64 },

    #[error("{what} must be finite and non-negative, got {value}")]
    Negative { what: &'static str, value: f32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fc-core`.
pub type CoreResult<T> = Result<T, CoreError>;

//! Grid error type.

use thiserror::Error;

use fc_core::{AgentRef, GridPos};

/// Errors produced by `fc-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("position {pos} lies outside the {width}x{height} grid")]
    OutOfBounds { pos: GridPos, width: u32, height: u32 },

    #[error("{agent} cannot move from {from} to non-adjacent cell {to}")]
    NotAdjacent { agent: AgentRef, from: GridPos, to: GridPos },

    #[error("{0} is already placed on the grid")]
    AlreadyPlaced(AgentRef),

    #[error("{0} is not on the grid")]
    NotPlaced(AgentRef),
}

pub type GridResult<T> = Result<T, GridError>;

use fc_behavior::BehaviorError;
use fc_core::{AgentRef, CoreError};
use fc_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("invalid festival configuration: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match visitor count {expected}")]
    VisitorCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("scheduled agent {0} does not exist")]
    UnknownAgent(AgentRef),

    #[error("cup ledger violated: {0}")]
    Ledger(String),
}

pub type SimResult<T> = Result<T, SimError>;

use thiserror::Error;

use fc_core::{CupId, StandId, VisitorId};
use fc_grid::GridError;

#[derive(Debug, Error, PartialEq)]
pub enum BehaviorError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("{0} does not exist")]
    UnknownCup(CupId),

    #[error("{0} does not exist")]
    UnknownStand(StandId),

    #[error("{0} wants a drink but the festival has no stands")]
    NoStands(VisitorId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

//! Move results and rejection reasons.
//!
//! Rejected moves are ordinary values, not failures: the engine state is
//! left untouched and the caller decides whether to report the reason.

use super::{Outcome, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The game already has a winner or is drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index is not a board position.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Result of attempting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move applied; carries the outcome after the move.
    Accepted(Outcome),
    /// Move ignored; state unchanged.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    /// Outcome after an accepted move.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveOutcome::Accepted(outcome) => Some(*outcome),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// Rejection reason, if the move was ignored.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// A replayed move sequence stopped at a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Move {} rejected: {}", move_number, reason)]
pub struct ReplayError {
    /// 1-based number of the rejected move.
    pub move_number: usize,
    /// Why it was rejected.
    #[error(source)]
    pub reason: MoveRejection,
}

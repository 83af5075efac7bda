//! Grid game - a pure 3x3 two-player marking game engine
//!
//! The engine owns a board, the mark to move next and the move history.
//! It knows nothing about rendering or input; a presentation layer drives
//! it through a handful of methods and redraws after each call.
//!
//! # Example
//!
//! ```
//! use grid_game::{GridGame, Mark, MoveOutcome, Outcome};
//!
//! let mut game = GridGame::new();
//! for pos in [0, 3, 1, 4] {
//!     assert!(game.attempt_move(pos).is_accepted());
//! }
//! assert_eq!(game.attempt_move(2), MoveOutcome::Accepted(Outcome::Win(Mark::X)));
//!
//! // Finished games ignore further moves until reset.
//! assert!(!game.attempt_move(8).is_accepted());
//! game.reset();
//! assert_eq!(game.evaluate_outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod outcome;
mod position;
mod types;

pub mod invariants;
pub mod rules;
pub mod status;

pub use action::{MoveOutcome, MoveRejection, ReplayError};
pub use engine::{GameSnapshot, GridGame};
pub use invariants::{
    GridGameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, TurnParityInvariant,
};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::evaluate_outcome;
pub use status::status_line;
pub use types::{Board, CELL_COUNT, Cell, Mark, ParseBoardError};

//! The grid game engine.

use super::action::{MoveOutcome, MoveRejection, ReplayError};
use super::invariants::{GridGameInvariants, InvariantSet};
use super::rules;
use super::{Board, Cell, Mark, Outcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A single 3x3 game: board, turn and move history.
///
/// The outcome is never stored; every query recomputes it from the board.
/// All mutation goes through [`attempt_move`](Self::attempt_move) and
/// [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridGame {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) history: Vec<Position>,
}

impl GridGame {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to place the current mark at a board index.
    ///
    /// Checks, in order: the game is still in progress, the index is on
    /// the board, the cell is empty. Any failed check leaves the game
    /// unchanged and is reported as [`MoveOutcome::Rejected`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn attempt_move(&mut self, position: usize) -> MoveOutcome {
        match self.check_move(position) {
            Ok(pos) => MoveOutcome::Accepted(self.apply(pos)),
            Err(reason) => {
                debug!(%reason, "Move rejected");
                MoveOutcome::Rejected(reason)
            }
        }
    }

    /// Attempts a move at a typed position.
    pub fn attempt_position(&mut self, position: Position) -> MoveOutcome {
        self.attempt_move(position.to_index())
    }

    fn check_move(&self, position: usize) -> Result<Position, MoveRejection> {
        if self.evaluate_outcome().is_terminal() {
            return Err(MoveRejection::GameOver);
        }
        let pos = Position::from_index(position).ok_or(MoveRejection::OutOfRange(position))?;
        if !self.board.is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }
        Ok(pos)
    }

    fn apply(&mut self, pos: Position) -> Outcome {
        let mark = self.turn;
        self.board.set(pos, Cell::Marked(mark));
        self.history.push(pos);
        self.turn = mark.opponent();

        let outcome = self.evaluate_outcome();
        debug!(position = %pos, %mark, %outcome, "Move accepted");
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }

        let check = GridGameInvariants::check_all(self);
        if let Err(violations) = &check {
            for violation in violations {
                warn!(description = %violation.description, "Invariant violated");
            }
        }
        debug_assert!(check.is_ok(), "Invariant violated after move");

        outcome
    }

    /// Computes the outcome of the current board.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate_outcome(&self.board)
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.history.clear();
        debug!("Game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the nine cells in index order.
    pub fn cells(&self) -> [Cell; 9] {
        *self.board.cells()
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the accepted positions in play order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the empty positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.evaluate_outcome().is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Plays a sequence of board indices on a fresh game.
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(positions: &[usize]) -> Result<Self, ReplayError> {
        let mut game = Self::new();
        for (i, &position) in positions.iter().enumerate() {
            if let MoveOutcome::Rejected(reason) = game.attempt_move(position) {
                return Err(ReplayError {
                    move_number: i + 1,
                    reason,
                });
            }
        }
        Ok(game)
    }

    /// Captures the current state for display or storage.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            turn: self.turn,
            outcome: self.evaluate_outcome(),
            history: self.history.clone(),
        }
    }
}

/// Serializable view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Mark to move next.
    pub turn: Mark,
    /// Outcome at the time of capture.
    pub outcome: Outcome,
    /// Accepted positions in play order.
    pub history: Vec<Position>,
}

//! Turn parity invariant: the turn follows from the marks on the board.

use super::Invariant;
use crate::{GridGame, Mark};

/// Invariant: X is to move exactly when both marks have been played
/// equally often.
pub struct TurnParityInvariant;

impl Invariant<GridGame> for TurnParityInvariant {
    fn holds(game: &GridGame) -> bool {
        let expected = if game.board().count(Mark::X) == game.board().count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "X moves when counts are equal, O otherwise"
    }
}

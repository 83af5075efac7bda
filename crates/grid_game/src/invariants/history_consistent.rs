//! History consistency invariant: the move log explains the board.

use super::Invariant;
use crate::{Cell, GridGame, Mark};

/// Invariant: every occupied cell appears once in the history, and the
/// k-th entry holds X for even k and O for odd k.
pub struct HistoryConsistentInvariant;

impl Invariant<GridGame> for HistoryConsistentInvariant {
    fn holds(game: &GridGame) -> bool {
        let history = game.history();
        if history.len() != game.board().occupied() {
            return false;
        }

        history.iter().enumerate().all(|(k, pos)| {
            let expected = if k % 2 == 0 { Mark::X } else { Mark::O };
            game.board().get(*pos) == Cell::Marked(expected)
        })
    }

    fn description() -> &'static str {
        "History matches the board (X on even moves, O on odd)"
    }
}

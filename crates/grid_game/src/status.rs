//! Status captions for presenting a game.

use super::{GridGame, Outcome};

/// One-line status for the current game.
pub fn status_line(game: &GridGame) -> String {
    match game.evaluate_outcome() {
        Outcome::InProgress => format!("Next player: {}", game.turn()),
        Outcome::Win(mark) => format!("Winner: {}", mark),
        Outcome::Draw => "Draw! Reset to play again.".to_string(),
    }
}

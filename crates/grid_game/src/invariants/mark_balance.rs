//! Mark balance invariant: X leads O by at most one mark.

use super::Invariant;
use crate::{GridGame, Mark};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and the marks alternate, so O can never be
/// ahead and X can never be two marks ahead.
pub struct MarkBalanceInvariant;

impl Invariant<GridGame> for MarkBalanceInvariant {
    fn holds(game: &GridGame) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_holds_after_each_move() {
        let mut game = GridGame::new();
        assert!(MarkBalanceInvariant::holds(&game));
        for pos in [4, 0, 8] {
            game.attempt_move(pos);
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut game = GridGame::new();
        game.board.set(Position::Center, Cell::Marked(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&game));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut game = GridGame::new();
        game.board.set(Position::TopLeft, Cell::Marked(Mark::X));
        game.board.set(Position::Center, Cell::Marked(Mark::X));
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}

//! Game rules for the grid game.
//!
//! Pure functions over a [`Board`](crate::Board). The outcome is always
//! recomputed from the full board rather than tracked incrementally, so
//! these functions can judge any injected board, legal or not.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates the outcome of a board.
///
/// Lines are checked in [`LINES`] order and the first completed line
/// decides the winner. A full board with no line is a draw.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_partial_board_in_progress() {
        assert_eq!(evaluate_outcome(&board("XO.X.O...")), Outcome::InProgress);
    }

    #[test]
    fn test_column_win() {
        assert_eq!(evaluate_outcome(&board(".O..O.XOX")), Outcome::Win(Mark::O));
    }

    #[test]
    fn test_full_board_win_is_not_draw() {
        // X completes the last line on the final move
        assert_eq!(evaluate_outcome(&board("XOXOXOOXX")), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_draw() {
        assert_eq!(evaluate_outcome(&board("XOXXOOOXX")), Outcome::Draw);
    }

    #[test]
    fn test_first_line_in_order_decides() {
        // Unreachable in play: both marks hold a complete row.
        assert_eq!(evaluate_outcome(&board("OOOXXX...")), Outcome::Win(Mark::O));
        assert_eq!(evaluate_outcome(&board("XXXOOO...")), Outcome::Win(Mark::X));
        // Column {0,3,6} precedes column {1,4,7}.
        assert_eq!(evaluate_outcome(&board("OX.OX.OX.")), Outcome::Win(Mark::O));
    }
}

//! Text rendering of the board.

use crate::config::CliConfig;
use grid_game::{Board, Cell, Mark};

/// Draws the board as a 3x3 grid using the configured glyphs.
///
/// Cell contents are padded to the widest glyph so columns line up.
pub fn render_board(board: &Board, config: &CliConfig) -> String {
    let labels: Vec<String> = board
        .cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell {
            Cell::Marked(Mark::X) => config.x_symbol().clone(),
            Cell::Marked(Mark::O) => config.o_symbol().clone(),
            Cell::Empty if *config.show_hints() => i.to_string(),
            Cell::Empty => " ".to_string(),
        })
        .collect();

    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);
    let rows: Vec<String> = labels
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|l| format!(" {:^width$} ", l, width = width))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    let separator = vec!["-".repeat(width + 2); 3].join("+");
    rows.join(&format!("\n{}\n", separator))
}

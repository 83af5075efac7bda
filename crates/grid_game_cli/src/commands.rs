//! One-shot commands.

use crate::config::CliConfig;
use crate::render::render_board;
use anyhow::{Context, Result};
use grid_game::{Board, GridGame, evaluate_outcome, rules, status_line};
use std::io::Write;
use tracing::instrument;

/// Prints a parsed board and its outcome.
#[instrument(skip(config, out))]
pub fn evaluate(board: &str, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;

    writeln!(out, "{}", render_board(&board, config))?;
    writeln!(out, "Outcome: {}", evaluate_outcome(&board))?;
    if let Some((_, line)) = rules::winning_line(&board) {
        let names: Vec<_> = line.iter().map(|p| p.label()).collect();
        writeln!(out, "Line: {}", names.join(", "))?;
    }
    Ok(())
}

/// Replays positions on a fresh game and prints the result.
#[instrument(skip(config, out))]
pub fn replay(positions: &[usize], json: bool, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let game = GridGame::replay(positions).context("Replay failed")?;

    if json {
        let text = serde_json::to_string_pretty(&game.snapshot())
            .context("Failed to serialize game")?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(out, "{}", render_board(game.board(), config))?;
        writeln!(out, "{}", status_line(&game))?;
    }
    Ok(())
}

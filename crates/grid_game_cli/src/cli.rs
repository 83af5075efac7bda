//! Command-line interface for grid-game.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Grid Game - play or inspect a 3x3 two-player marking game
#[derive(Parser, Debug)]
#[command(name = "grid-game")]
#[command(about = "Play or inspect a 3x3 two-player marking game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Print the outcome of a board, e.g. "XOX/.O./..X"
    Evaluate {
        /// Nine cells row-major: X, O, or . for empty ('/' separators allowed)
        board: String,
    },

    /// Replay board indices (0-8) on a fresh game
    Replay {
        /// Positions in play order, X first
        #[arg(required = true)]
        positions: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

//! Grid Game - terminal front end

use anyhow::{Context, Result};
use clap::Parser;
use grid_game_cli::{Cli, CliConfig, Command, Session, commands};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    info!(command = ?cli.command, "Starting grid-game");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Play => {
            let mut session = Session::new(config, io::stdin().lock(), stdout);
            session.run().context("Interactive session failed")?;
        }
        Command::Evaluate { board } => commands::evaluate(&board, &config, &mut stdout)?,
        Command::Replay { positions, json } => {
            commands::replay(&positions, json, &config, &mut stdout)?
        }
    }

    Ok(())
}

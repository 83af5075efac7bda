//! Terminal front end for the grid game engine.
//!
//! The binary is a thin presentation layer: it parses commands, feeds
//! them to a [`grid_game::GridGame`] and prints whatever the engine
//! reports back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use render::render_board;
pub use session::{Input, Session};

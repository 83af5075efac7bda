//! Interactive line-based game session.

use crate::config::CliConfig;
use crate::render::render_board;
use grid_game::{GridGame, MoveOutcome, Position, status_line};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  0-8 or a label   place the next mark on the cell showing that number
                   (e.g. 4, center, top-left)
  reset            start a new game
  board            show the board again
  help             show this help
  quit             leave";

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Place a mark.
    Move(usize),
    /// Start over.
    Reset,
    /// Redraw the board.
    Board,
    /// Show commands.
    Help,
    /// End the session.
    Quit,
    /// Blank line.
    Nothing,
    /// Anything unrecognized.
    Unknown(String),
}

impl Input {
    /// Parses one line of user input.
    ///
    /// Numbers are the indices shown in empty cells. They are passed
    /// through unchecked so the engine decides whether they are on the
    /// board; digit strings too long for `usize` saturate to `usize::MAX`.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Input::Nothing,
            "reset" | "r" | "new" => Input::Reset,
            "board" | "b" => Input::Board,
            "help" | "h" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            other => {
                if other.chars().all(|c| c.is_ascii_digit()) {
                    Input::Move(other.parse::<usize>().unwrap_or(usize::MAX))
                } else if let Some(pos) = Position::from_label_or_number(other) {
                    Input::Move(pos.to_index())
                } else {
                    Input::Unknown(trimmed.to_string())
                }
            }
        }
    }
}

/// Drives one engine from a reader and writes everything to a writer.
pub struct Session<R, W> {
    game: GridGame,
    config: CliConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around a fresh game.
    pub fn new(config: CliConfig, input: R, output: W) -> Self {
        Self {
            game: GridGame::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GridGame {
        &self.game
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        info!("Interactive session started");
        writeln!(self.output, "Type 'help' for commands.")?;
        self.show()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            let input = Input::parse(&line);
            debug!(?input, "Read command");
            if !self.handle(input)? {
                break;
            }
        }

        info!(moves = self.game.history().len(), "Interactive session ended");
        Ok(())
    }

    /// Applies one command; returns false when the session should end.
    fn handle(&mut self, input: Input) -> io::Result<bool> {
        match input {
            Input::Move(index) => match self.game.attempt_move(index) {
                MoveOutcome::Accepted(_) => self.show()?,
                MoveOutcome::Rejected(reason) => writeln!(self.output, "{}", reason)?,
            },
            Input::Reset => {
                self.game.reset();
                self.show()?;
            }
            Input::Board => self.show()?,
            Input::Help => writeln!(self.output, "{}", HELP)?,
            Input::Quit => return Ok(false),
            Input::Nothing => {}
            Input::Unknown(text) => {
                writeln!(self.output, "Unknown command {:?}. Type 'help'.", text)?
            }
        }
        Ok(true)
    }

    fn show(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}\n{}",
            render_board(self.game.board(), &self.config),
            status_line(&self.game)
        )
    }
}

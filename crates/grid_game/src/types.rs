//! Core domain types for the grid game.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (always moves first).
    #[default]
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 board, cells stored row-major (index 0-8).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw cells.
    ///
    /// No balance check is applied, so any arrangement can be built.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their board index.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => result.push_str(&pos.to_string()),
                    Cell::Marked(mark) => result.push(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Compact row-major form, e.g. `XO.X.....`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = match cell {
                Cell::Empty => '.',
                Cell::Marked(mark) => mark.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("expected {} cells, got {}", CELL_COUNT, got)]
    WrongLength {
        /// Cells actually found.
        got: usize,
    },
    /// A character that is neither a mark nor an empty marker.
    #[display("invalid character {:?} at cell {}", character, index)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Cell index it would have filled.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut index = 0;
        for character in s.chars().filter(|c| !matches!(c, '/' | '|')) {
            let cell = match character {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => {
                    return Err(ParseBoardError::InvalidCharacter {
                        character: other,
                        index,
                    });
                }
            };
            if index < CELL_COUNT {
                cells[index] = cell;
            }
            index += 1;
        }
        if index != CELL_COUNT {
            return Err(ParseBoardError::WrongLength { got: index });
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell(8), Some(Cell::Empty));
        assert_eq!(board.cell(9), None);
    }

    #[test]
    fn test_parse_with_row_separators() {
        let board: Board = "XOX/.o./--x".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Cell::Marked(Mark::X));
        assert_eq!(board.get(Position::Center), Cell::Marked(Mark::O));
        assert_eq!(board.get(Position::BottomRight), Cell::Marked(Mark::X));
        assert_eq!(board.count(Mark::X), 3);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.to_string(), "XOX.O...X");
    }

    #[test]
    fn test_parse_wrong_length() {
        let err = "XOX".parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::WrongLength { got: 3 });

        let err = "XOXOXOXOXO".parse::<Board>().unwrap_err();
        assert_eq!(err, ParseBoardError::WrongLength { got: 10 });
    }

    #[test]
    fn test_parse_invalid_character() {
        let err = "XOZ......".parse::<Board>().unwrap_err();
        assert_eq!(
            err,
            ParseBoardError::InvalidCharacter {
                character: 'Z',
                index: 2
            }
        );
        assert!(err.to_string().contains("cell 2"));
    }

    #[test]
    fn test_render_shows_hints() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.render(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}

//! Core domain types for tic-tac-toe.

use crate::action::Move;
use crate::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the mark that moves from the snapshot at `step`.
    ///
    /// Even steps belong to X, odd steps to O.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
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

    /// Returns the single-character symbol used by [`Board`]'s text form.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Marked(Mark::X) => 'X',
            Cell::Marked(Mark::O) => 'O',
        }
    }
}

/// Immutable 3x3 snapshot of the grid.
///
/// Boards are values: placing a mark returns a new board and leaves the
/// original untouched, so snapshots stored in a history stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from raw cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// Does not check occupancy; callers validate first.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut cells = self.cells;
        cells[pos.to_index()] = Cell::Marked(mark);
        Self { cells }
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Recovers the move that turned `previous` into `self`.
    ///
    /// Returns `None` unless exactly one cell went from empty to marked
    /// and no other cell changed.
    #[instrument(level = "trace", skip_all)]
    pub fn move_from(&self, previous: &Board) -> Option<Move> {
        let mut found = None;
        for pos in Position::ALL {
            match (previous.get(pos), self.get(pos)) {
                (before, after) if before == after => {}
                (Cell::Empty, Cell::Marked(mark)) if found.is_none() => {
                    found = Some(Move::new(mark, pos));
                }
                _ => return None,
            }
        }
        found
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.cells[row * 3 + col].symbol())?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and digits are empty.
    /// Whitespace, `|`, `+` and `-` are ignored, so [`Board`]'s `Display`
    /// output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '_' => Cell::Empty,
                c if c.is_ascii_digit() => Cell::Empty,
                c if c.is_whitespace() || matches!(c, '|' | '+' | '-') => continue,
                other => return Err(ParseBoardError::UnexpectedChar(other)),
            };
            if count < 9 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 9 {
            return Err(ParseBoardError::WrongCellCount(count));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_for_step_parity() {
        assert_eq!(Mark::for_step(0), Mark::X);
        assert_eq!(Mark::for_step(1), Mark::O);
        assert_eq!(Mark::for_step(8), Mark::X);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(next.marked_count(), 1);
    }

    #[test]
    fn test_display_parses_back() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O)
            .with_mark(Position::BottomRight, Mark::X);
        let text = board.to_string();
        assert_eq!(text, "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|X");
        assert_eq!(text.parse::<Board>(), Ok(board));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::UnexpectedChar('?'))
        );
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongCellCount(2))
        );
    }

    #[test]
    fn test_move_from_detects_single_placement() {
        let before: Board = "X........".parse().unwrap();
        let after: Board = "X...O....".parse().unwrap();
        assert_eq!(
            after.move_from(&before),
            Some(Move::new(Mark::O, Position::Center))
        );
        assert_eq!(before.move_from(&before), None);
        let two: Board = "XX..O....".parse().unwrap();
        assert_eq!(two.move_from(&before), None);
        let overwritten: Board = "O........".parse().unwrap();
        assert_eq!(overwritten.move_from(&before), None);
    }
}

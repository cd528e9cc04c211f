//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// All winning lines, in evaluation order.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The winning mark.
    pub winner: Mark,
    /// The line that was completed.
    pub line: Line,
}

/// Evaluates a board for a completed line.
///
/// Lines are checked in [`LINES`] order and the first uniform, non-empty
/// line decides. Total over all boards, including ones unreachable by
/// legal play.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Cell::Marked(mark)
                if board.get(b) == Cell::Marked(mark) && board.get(c) == Cell::Marked(mark) =>
            {
                Some(Win {
                    winner: mark,
                    line: *line,
                })
            }
            _ => None,
        }
    })
}

/// Returns the winning mark, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    evaluate(board).map(|win| win.winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let win = evaluate(&board("XXX OO. ...")).unwrap();
        assert_eq!(win.winner, Mark::X);
        assert_eq!(win.line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let win = evaluate(&board("XXO XO. O..")).unwrap();
        assert_eq!(win.winner, Mark::O);
        assert_eq!(win.line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(evaluate(&board("XX. OO. ..X")), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Unreachable by legal play, but ordering must be deterministic.
        let win = evaluate(&board("XXX OOO ...")).unwrap();
        assert_eq!(win.winner, Mark::X);
        assert_eq!(win.line, LINES[0]);

        let win = evaluate(&board("X.O X.O X.O")).unwrap();
        assert_eq!(win.line.indices(), [0, 3, 6]);
    }

    #[test]
    fn test_line_contains() {
        assert!(LINES[6].contains(Position::Center));
        assert!(!LINES[0].contains(Position::Center));
    }

    #[test]
    fn test_exhaustive_against_reference() {
        const TRIPLES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];

        for code in 0..3usize.pow(9) {
            let mut cells = [Cell::Empty; 9];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = match rest % 3 {
                    0 => Cell::Empty,
                    1 => Cell::Marked(Mark::X),
                    _ => Cell::Marked(Mark::O),
                };
                rest /= 3;
            }
            let board = Board::from_cells(cells);

            let expected = TRIPLES.iter().find_map(|&[a, b, c]| {
                let first = cells[a];
                (first != Cell::Empty && first == cells[b] && first == cells[c])
                    .then(|| (first.mark().unwrap(), [a, b, c]))
            });
            let actual = evaluate(&board).map(|win| (win.winner, win.line.indices()));

            assert_eq!(actual, expected, "board {code}:\n{board}");
        }
    }
}

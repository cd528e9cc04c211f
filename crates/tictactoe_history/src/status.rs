//! Derived game status.

use crate::rules::{Win, evaluate, is_full};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Where the game stands at one snapshot.
///
/// Always computed from a board, never stored alongside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress {
        /// The mark that moves next.
        next: Mark,
    },
    /// A line is complete.
    Won(Win),
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board` when it is the snapshot at `step`.
    pub fn of(board: &Board, step: usize) -> Self {
        if let Some(win) = evaluate(board) {
            GameStatus::Won(win)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: Mark::for_step(step),
            }
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winning line, if any.
    pub fn win(&self) -> Option<&Win> {
        match self {
            GameStatus::Won(win) => Some(win),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(win) => write!(f, "Winner: {}", win.winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

//! Root invariant: the history always starts at the empty board.

use super::Invariant;
use crate::{Board, GameHistory};

/// Invariant: `entries[0]` exists and is the empty board.
pub struct RootIsEmptyInvariant;

impl Invariant<GameHistory> for RootIsEmptyInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.entries().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

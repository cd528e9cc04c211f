//! Rejection types for history operations.
//!
//! None of these are fatal. They come from ordinary interaction (clicking a
//! filled cell, picking a history entry that no longer exists) and every
//! rejected operation leaves the history untouched.

use crate::{Mark, Position};
use derive_more::{Display, From};

/// A cell selection that cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidCellSelection {
    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The current snapshot already has a winner.
    #[display("Game already won by {}", _0)]
    GameDecided(Mark),

    /// The index does not name a cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for InvalidCellSelection {}

/// A history step that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Move #{} does not exist (history has {} entries)", requested, len)]
pub struct InvalidHistoryIndex {
    /// The step that was asked for.
    pub requested: usize,
    /// Number of snapshots at the time of the request.
    pub len: usize,
}

impl std::error::Error for InvalidHistoryIndex {}

/// Any rejection from [`GameHistory::apply`](crate::GameHistory::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum Rejection {
    /// See [`InvalidCellSelection`].
    #[display("Invalid cell selection: {}", _0)]
    Cell(InvalidCellSelection),

    /// See [`InvalidHistoryIndex`].
    #[display("Invalid history index: {}", _0)]
    History(InvalidHistoryIndex),
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Rejection::Cell(e) => Some(e),
            Rejection::History(e) => Some(e),
        }
    }
}

/// A replayed sequence that hit a rejected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Replay stopped at move #{}: {}", step, reason)]
pub struct ReplayError {
    /// Snapshot the rejected index was played from.
    pub step: usize,
    /// Why it was rejected.
    pub reason: InvalidCellSelection,
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

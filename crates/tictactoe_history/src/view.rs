//! Presentation helpers derived from a [`GameHistory`].
//!
//! Everything here is recomputed from the current snapshot on each call so
//! a front end never renders stale status.

use crate::action::Move;
use crate::{Board, GameHistory, Position, rules};
use serde::Serialize;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListItem {
    /// Snapshot index this row jumps to.
    pub step: usize,
    /// Whether this is the snapshot on display.
    pub is_current: bool,
    /// The move that produced this snapshot (`None` for the game start).
    pub mov: Option<Move>,
    /// Text to show for the row.
    pub label: String,
}

/// Status text for the current snapshot.
pub fn status_line(history: &GameHistory) -> String {
    history.status().to_string()
}

/// Builds the move list, one item per snapshot.
///
/// The current snapshot reads "You are at move #n"; the others read
/// "Go to game start" or "Go to move #n".
pub fn move_list(history: &GameHistory) -> Vec<MoveListItem> {
    let entries = history.entries();
    (0..entries.len())
        .map(|step| {
            let is_current = step == history.current_move();
            let mov = step
                .checked_sub(1)
                .and_then(|prev| entries[step].move_from(&entries[prev]));
            let label = if is_current {
                format!("You are at move #{}", step)
            } else if step == 0 {
                "Go to game start".to_string()
            } else {
                format!("Go to move #{}", step)
            };
            MoveListItem {
                step,
                is_current,
                mov,
                label,
            }
        })
        .collect()
}

/// Checks if `pos` lies on the completed line of `board`.
pub fn is_winning_cell(board: &Board, pos: Position) -> bool {
    rules::evaluate(board).is_some_and(|win| win.line.contains(pos))
}

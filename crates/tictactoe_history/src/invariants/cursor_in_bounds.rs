//! Cursor invariant: the current move always names a stored snapshot.

use super::Invariant;
use crate::GameHistory;

/// Invariant: `0 <= current_move < move_count`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameHistory> for CursorInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.current_move() < history.move_count()
    }

    fn description() -> &'static str {
        "Current move indexes a stored snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_rejected_jump_keeps_cursor_in_bounds() {
        let mut history = GameHistory::replay([4]).unwrap();
        assert!(history.jump_to(7).is_err());
        assert!(CursorInBoundsInvariant::holds(&history));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let history = GameHistory::from_parts(vec![Board::new()], 1);
        assert!(!CursorInBoundsInvariant::holds(&history));
    }
}

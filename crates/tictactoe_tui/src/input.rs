//! Key bindings.

use crossterm::event::KeyCode;
use tictactoe_history::Position;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the history selection.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Start a new game.
    Reset,
    /// Switch focus between board and history.
    ToggleFocus,
    /// Move the board cursor (or the history selection) with an arrow key.
    Navigate(KeyCode),
    /// Confirm: play at the cursor, or jump to the selected history row.
    Select,
    /// Play directly at a position.
    PlayAt(Position),
    /// Step one move back in history.
    Undo,
    /// Step one move forward in history.
    Redo,
    /// Jump to the game start.
    JumpStart,
    /// Jump to the latest move.
    JumpLatest,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Tab => Some(Action::ToggleFocus),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Navigate(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Position::from_index(index).map(Action::PlayAt)
        }
        KeyCode::Char('[') | KeyCode::PageUp => Some(Action::Undo),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Action::Redo),
        KeyCode::Home => Some(Action::JumpStart),
        KeyCode::End => Some(Action::JumpLatest),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_positions() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::PlayAt(Position::TopLeft)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::PlayAt(Position::BottomRight)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }
}

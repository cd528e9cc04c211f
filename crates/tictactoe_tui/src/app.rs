//! Application state and logic.

use crate::input::{Action, Focus, action_for, move_cursor};
use crate::ui::Palette;
use crossterm::event::KeyCode;
use tictactoe_history::{Command, GameHistory, Position, Rejection};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the one [`GameHistory`] of the session; everything else here is
/// view state (cursor, focus, the last rejection message).
#[derive(Debug)]
pub struct App {
    history: GameHistory,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: Option<String>,
    palette: Palette,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty game.
    pub fn new(palette: Palette) -> Self {
        Self {
            history: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            message: None,
            palette,
            should_quit: false,
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row in the history list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Message from the last rejected action, cleared by the next success.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Colors in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(action) = action_for(key) {
            self.perform(action);
        }
    }

    /// Performs an action.
    #[instrument(skip(self), fields(step = self.history.current_move(), focus = ?self.focus))]
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Reset => {
                info!("Restarting game");
                self.dispatch(Command::Reset);
                self.cursor = Position::Center;
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.history.current_move();
            }
            Action::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
            Action::Select => match self.focus {
                Focus::Board => self.dispatch(Command::Play(self.cursor)),
                Focus::History => self.dispatch(Command::JumpTo(self.selected)),
            },
            Action::PlayAt(position) => {
                self.cursor = position;
                self.dispatch(Command::Play(position));
            }
            Action::Undo => {
                let result = self.history.undo();
                self.settle(result.map_err(Rejection::from));
            }
            Action::Redo => {
                let result = self.history.redo();
                self.settle(result.map_err(Rejection::from));
            }
            Action::JumpStart => self.dispatch(Command::JumpTo(0)),
            Action::JumpLatest => {
                let latest = self.history.move_count() - 1;
                self.dispatch(Command::JumpTo(latest));
            }
        }
    }

    fn dispatch(&mut self, command: Command) {
        let result = self.history.apply(command);
        self.settle(result);
    }

    fn settle(&mut self, result: Result<(), Rejection>) {
        match result {
            Ok(()) => {
                debug!(
                    step = self.history.current_move(),
                    len = self.history.move_count(),
                    "History updated"
                );
                self.message = None;
                self.selected = self.history.current_move();
            }
            Err(rejection) => {
                debug!(%rejection, "Action rejected");
                self.message = Some(rejection_message(&rejection));
            }
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.history.move_count() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }
}

fn rejection_message(rejection: &Rejection) -> String {
    match rejection {
        Rejection::Cell(cell) => cell.to_string(),
        Rejection::History(index) if index.requested == 0 => "Already at game start".to_string(),
        Rejection::History(_) => "Already at the latest move".to_string(),
    }
}

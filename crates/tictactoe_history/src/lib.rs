//! Tic-tac-toe game core with branching move history.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 snapshots; a move produces a new board
//! - **Rules**: pure win and draw detection over a single snapshot
//! - **GameHistory**: every snapshot of a session plus a time-travel cursor
//! - **View**: status text and move-list rows derived on demand
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameHistory, Mark, Position};
//!
//! let mut history = GameHistory::new();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     history.play(pos).unwrap();
//! }
//! let win = history.winner().unwrap();
//! assert_eq!(win.winner, Mark::X);
//! assert_eq!(win.line.indices(), [0, 1, 2]);
//!
//! // Go back and branch: everything after step 2 is discarded.
//! history.jump_to(2).unwrap();
//! history.play(Position::BottomRight).unwrap();
//! assert_eq!(history.move_count(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;
pub mod view;

pub use action::{Command, Move};
pub use error::{InvalidCellSelection, InvalidHistoryIndex, Rejection, ReplayError};
pub use history::GameHistory;
pub use position::Position;
pub use rules::{Line, Win};
pub use status::GameStatus;
pub use types::{Board, Cell, Mark, ParseBoardError};

//! Terminal front end for tic-tac-toe with time travel.
//!
//! A thin presentation layer over [`tictactoe_history`]: key presses become
//! history commands, and every frame is re-rendered from the current
//! snapshot.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};

//! TOML configuration for the terminal front end.

use crate::ui::Palette;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Log output settings.
    log: LogConfig,
    /// Board colors.
    theme: ThemeConfig,
}

/// Where tracing output goes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file for the interactive UI (the terminal is taken).
    file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tictactoe.log"),
            filter: "info".to_string(),
        }
    }
}

/// Color names as accepted by ratatui (`"blue"`, `"lightred"`, `"#ff8800"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color of X marks.
    x: String,
    /// Color of O marks.
    o: String,
    /// Background of the winning line.
    highlight: String,
    /// Background of the board cursor.
    cursor: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            x: "blue".to_string(),
            o: "red".to_string(),
            highlight: "green".to_string(),
            cursor: "white".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Resolves the color names.
    #[instrument(skip(self))]
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("theme.x", &self.x)?,
            o: parse_color("theme.o", &self.o)?,
            highlight: parse_color("theme.highlight", &self.highlight)?,
            cursor: parse_color("theme.cursor", &self.cursor)?,
        })
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Invalid color {:?} for {}", value, key)))
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults. Colors are validated here so a
    /// bad theme fails before the terminal is taken over.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            trace!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads configuration from a TOML file that must exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        trace!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme.palette()?;
        trace!(log_file = %config.log.file.display(), "Config parsed");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Tests for loading the TOML config from disk.

use std::io::Write;
use std::path::PathBuf;
use tictactoe_tui::TuiConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TuiConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.log().file(), &PathBuf::from("tictactoe.log"));
    assert_eq!(config.log().filter(), "info");
}

#[test]
fn test_file_overrides_sections() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r##"
[log]
file = "game.log"
filter = "tictactoe_history=debug"

[theme]
o = "magenta"
cursor = "#ffaa00"
"##
    )
    .unwrap();

    let config = TuiConfig::load(file.path()).unwrap();
    assert_eq!(config.log().file(), &PathBuf::from("game.log"));
    assert_eq!(config.log().filter(), "tictactoe_history=debug");
    assert_eq!(config.theme().o(), "magenta");
    assert_eq!(config.theme().x(), "blue");

    let palette = config.theme().palette().unwrap();
    assert_eq!(palette.cursor, ratatui::style::Color::Rgb(0xff, 0xaa, 0x00));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[log\nfile = ").unwrap();

    let err = TuiConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"), "{err}");
    assert!(err.file.ends_with("config.rs"));
}

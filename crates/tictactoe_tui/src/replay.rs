//! Headless replay of a move sequence.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tictactoe_history::{Board, GameHistory, GameStatus, Move, Position, view};
use tracing::{info, instrument};

/// One snapshot in `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Snapshot index (0 is the empty board).
    pub step: usize,
    /// Move that produced this snapshot.
    #[serde(rename = "move")]
    pub mov: Option<Move>,
    /// The board.
    pub board: Board,
    /// Derived status at this snapshot.
    pub status: GameStatus,
}

/// Collects every snapshot of `history` with its derived status.
pub fn snapshots(history: &GameHistory) -> Vec<Snapshot> {
    view::move_list(history)
        .into_iter()
        .zip(history.entries())
        .map(|(item, board)| Snapshot {
            step: item.step,
            mov: item.mov,
            board: *board,
            status: GameStatus::of(board, item.step),
        })
        .collect()
}

/// Plays `cells` from an empty game and writes the result to `out`.
///
/// Text output is the final board followed by its status; JSON output is
/// an array with every snapshot.
#[instrument(skip(out))]
pub fn run(cells: &[Position], json: bool, out: &mut impl Write) -> Result<()> {
    let history = GameHistory::replay(cells.iter().map(|cell| cell.to_index()))
        .with_context(|| format!("Failed to replay moves {:?}", cells))?;
    info!(moves = history.move_count() - 1, status = %history.status(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshots(&history))
            .context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", history.current_board())?;
        writeln!(out)?;
        writeln!(out, "{}", history.status())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|&i| Position::from_index(i).unwrap())
            .collect()
    }

    #[test]
    fn test_text_output() {
        let mut out = Vec::new();
        run(&cells(&[0, 3, 1, 4, 2]), false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "X|X|X\n-+-+-\nO|O|.\n-+-+-\n.|.|.\n\nWinner: X\n");
    }

    #[test]
    fn test_rejected_move_is_an_error() {
        let mut out = Vec::new();
        let err = run(&[Position::Center, Position::Center], false, &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("Center is already occupied"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_snapshots_track_status() {
        let history = GameHistory::replay([0, 3, 1, 4, 2]).unwrap();
        let snaps = snapshots(&history);
        assert_eq!(snaps.len(), 6);
        assert!(snaps[0].mov.is_none());
        assert!(!snaps[4].status.is_over());
        assert!(snaps[5].status.is_over());
    }
}

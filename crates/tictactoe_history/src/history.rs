//! Branching move history with a time-travel cursor.
//!
//! A [`GameHistory`] owns every snapshot of one game session and a cursor
//! selecting the snapshot on display. Jumping back moves only the cursor;
//! playing from an earlier snapshot discards everything after it before
//! appending, so the history branches instead of growing a tree.

use crate::action::{Command, Move};
use crate::error::{InvalidCellSelection, InvalidHistoryIndex, Rejection, ReplayError};
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::{self, Win};
use crate::status::GameStatus;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Ordered board snapshots plus the current move cursor.
///
/// `entries[0]` is always the empty board and `current_move` always indexes
/// a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    entries: Vec<Board>,
    current_move: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Plays cell indices 0-8 from an empty game.
    ///
    /// Stops at the first rejected index and reports the step it would have
    /// been played from.
    #[instrument(skip(indices))]
    pub fn replay<I>(indices: I) -> Result<Self, ReplayError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut history = Self::new();
        for index in indices {
            let step = history.current_move;
            history
                .play_index(index)
                .map_err(|reason| ReplayError { step, reason })?;
        }
        Ok(history)
    }

    /// Places the next mark at `position`.
    ///
    /// The mover is decided by the parity of the current cursor. Any
    /// snapshots after the cursor are discarded before the new one is
    /// appended.
    ///
    /// # Errors
    ///
    /// - [`InvalidCellSelection::GameDecided`] if the current snapshot
    ///   already has a winner.
    /// - [`InvalidCellSelection::CellOccupied`] if the cell holds a mark.
    ///
    /// Neither changes any state.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, position: Position) -> Result<(), InvalidCellSelection> {
        let board = *self.current_board();

        if let Some(winner) = rules::winner(&board) {
            debug!(%winner, "Rejected move: game already decided");
            return Err(InvalidCellSelection::GameDecided(winner));
        }

        if !board.is_empty(position) {
            debug!(%position, "Rejected move: cell occupied");
            return Err(InvalidCellSelection::CellOccupied(position));
        }

        let mark = self.next_mark();
        let next = board.with_mark(position, mark);

        let discarded = self.entries.len() - (self.current_move + 1);
        self.entries.truncate(self.current_move + 1);
        self.entries.push(next);
        self.current_move = self.entries.len() - 1;

        debug!(%mark, %position, discarded, step = self.current_move, "Move played");
        self.debug_check_invariants();
        Ok(())
    }

    /// Plays at a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// [`InvalidCellSelection::OutOfBounds`] for indices past 8, otherwise
    /// as [`play`](Self::play).
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<(), InvalidCellSelection> {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Rejected move: index out of bounds");
            return Err(InvalidCellSelection::OutOfBounds(index));
        };
        self.play(position)
    }

    /// Moves the cursor to `step` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// [`InvalidHistoryIndex`] if `step` is not a stored snapshot.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), InvalidHistoryIndex> {
        if step >= self.entries.len() {
            debug!(len = self.entries.len(), "Rejected jump: step out of range");
            return Err(InvalidHistoryIndex {
                requested: step,
                len: self.entries.len(),
            });
        }
        self.current_move = step;
        self.debug_check_invariants();
        Ok(())
    }

    /// Steps the cursor back by one.
    ///
    /// # Errors
    ///
    /// [`InvalidHistoryIndex`] when already at the game start.
    pub fn undo(&mut self) -> Result<(), InvalidHistoryIndex> {
        match self.current_move.checked_sub(1) {
            Some(step) => self.jump_to(step),
            None => Err(InvalidHistoryIndex {
                requested: 0,
                len: self.entries.len(),
            }),
        }
    }

    /// Steps the cursor forward by one.
    ///
    /// # Errors
    ///
    /// [`InvalidHistoryIndex`] when already at the latest snapshot.
    pub fn redo(&mut self) -> Result<(), InvalidHistoryIndex> {
        self.jump_to(self.current_move + 1)
    }

    /// Discards everything and starts over with an empty board.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn reset(&mut self) {
        debug!("Resetting history");
        *self = Self::new();
    }

    /// Dispatches a presentation-layer command.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation rejects with.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Result<(), Rejection> {
        match command {
            Command::Play(position) => self.play(position)?,
            Command::JumpTo(step) => self.jump_to(step)?,
            Command::Reset => self.reset(),
        }
        Ok(())
    }

    /// The snapshot under the cursor.
    pub fn current_board(&self) -> &Board {
        &self.entries[self.current_move]
    }

    /// Number of snapshots (moves played on this branch plus one).
    pub fn move_count(&self) -> usize {
        self.entries.len()
    }

    /// The cursor.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// All snapshots, oldest first.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Checks if the cursor is on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current_move + 1 == self.entries.len()
    }

    /// The mark that moves from the current snapshot.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_move)
    }

    /// Derived status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(self.current_board(), self.current_move)
    }

    /// Completed line on the current snapshot, if any.
    pub fn winner(&self) -> Option<Win> {
        rules::evaluate(self.current_board())
    }

    /// Moves that produced each snapshot after the first, with their step.
    pub fn moves(&self) -> impl Iterator<Item = (usize, Move)> + '_ {
        self.entries
            .windows(2)
            .enumerate()
            .filter_map(|(i, pair)| pair[1].move_from(&pair[0]).map(|mov| (i + 1, mov)))
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = HistoryInvariants::check_all(self)
        {
            panic!("history invariants violated: {violations:?}");
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl GameHistory {
    /// Builds a history from raw parts, bypassing every check.
    pub(crate) fn from_parts(entries: Vec<Board>, current_move: usize) -> Self {
        Self {
            entries,
            current_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn played(indices: &[usize]) -> GameHistory {
        GameHistory::replay(indices.iter().copied()).unwrap()
    }

    #[test]
    fn test_new_history_is_single_empty_board() {
        let history = GameHistory::new();
        assert_eq!(history.entries(), &[Board::new()]);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.next_mark(), Mark::X);
    }

    #[test]
    fn test_play_appends_and_alternates() {
        let mut history = GameHistory::new();
        history.play(Position::Center).unwrap();
        history.play(Position::TopLeft).unwrap();

        assert_eq!(history.move_count(), 3);
        assert_eq!(history.current_move(), 2);
        let board = history.current_board();
        assert_eq!(board.get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(board.get(Position::TopLeft), Cell::Marked(Mark::O));
        // Earlier snapshot untouched.
        assert!(history.entries()[1].is_empty(Position::TopLeft));
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut history = played(&[4]);
        let before = history.clone();
        assert_eq!(
            history.play(Position::Center),
            Err(InvalidCellSelection::CellOccupied(Position::Center))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_play_after_win_is_noop() {
        let mut history = played(&[0, 3, 1, 4, 2]);
        let before = history.clone();
        assert_eq!(
            history.play(Position::BottomRight),
            Err(InvalidCellSelection::GameDecided(Mark::X))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_out_of_bounds_index_is_noop() {
        let mut history = played(&[0]);
        let before = history.clone();
        assert_eq!(
            history.play_index(9),
            Err(InvalidCellSelection::OutOfBounds(9))
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_jump_moves_cursor_only() {
        let mut history = played(&[0, 4, 1]);
        history.jump_to(1).unwrap();
        assert_eq!(history.move_count(), 4);
        assert_eq!(history.current_move(), 1);
        assert_eq!(history.next_mark(), Mark::O);
        assert!(!history.is_at_latest());

        assert_eq!(
            history.jump_to(4),
            Err(InvalidHistoryIndex {
                requested: 4,
                len: 4
            })
        );
        assert_eq!(history.current_move(), 1);
    }

    #[test]
    fn test_play_after_jump_truncates_future() {
        let mut history = played(&[0, 4, 1, 3, 8]);
        history.jump_to(2).unwrap();
        history.play(Position::MiddleRight).unwrap();

        assert_eq!(history.move_count(), 4);
        assert_eq!(history.current_move(), 3);
        assert_eq!(
            history.current_board().get(Position::MiddleRight),
            Cell::Marked(Mark::X)
        );
        assert!(history.current_board().is_empty(Position::MiddleLeft));
    }

    #[test]
    fn test_play_at_latest_discards_nothing() {
        let mut history = played(&[0, 4]);
        history.play(Position::TopCenter).unwrap();
        assert_eq!(history.move_count(), 4);
        assert_eq!(history.entries()[2], played(&[0, 4]).entries()[2]);
    }

    #[test]
    fn test_undo_redo_bounds() {
        let mut history = played(&[0]);
        assert!(history.redo().is_err());
        history.undo().unwrap();
        assert_eq!(history.current_move(), 0);
        assert!(history.undo().is_err());
        history.redo().unwrap();
        assert_eq!(history.current_move(), 1);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut history = played(&[0, 4, 1]);
        history.jump_to(1).unwrap();
        history.reset();
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_apply_dispatches_commands() {
        let mut history = GameHistory::new();
        history.apply(Command::Play(Position::Center)).unwrap();
        history.apply(Command::JumpTo(0)).unwrap();
        assert_eq!(history.current_move(), 0);

        let err = history.apply(Command::JumpTo(5)).unwrap_err();
        assert!(matches!(err, Rejection::History(_)));

        history.apply(Command::Play(Position::TopLeft)).unwrap();
        let err = history.apply(Command::Play(Position::TopLeft)).unwrap_err();
        assert!(matches!(err, Rejection::Cell(_)));

        history.apply(Command::Reset).unwrap();
        assert_eq!(history.move_count(), 1);
    }

    #[test]
    fn test_moves_recovers_each_placement() {
        let history = played(&[4, 0, 8]);
        let moves: Vec<_> = history.moves().collect();
        assert_eq!(
            moves,
            vec![
                (1, Move::new(Mark::X, Position::Center)),
                (2, Move::new(Mark::O, Position::TopLeft)),
                (3, Move::new(Mark::X, Position::BottomRight)),
            ]
        );
    }

    #[test]
    fn test_replay_reports_failing_step() {
        let err = GameHistory::replay([0, 1, 0]).unwrap_err();
        assert_eq!(err.step, 2);
        assert_eq!(
            err.reason,
            InvalidCellSelection::CellOccupied(Position::TopLeft)
        );
    }
}

//! The game history controller: append-only board snapshots with a
//! movable cursor.
//!
//! Playing a move from a past cursor discards the snapshots beyond it
//! (branching-timeline semantics), so the history is always a single
//! line of play ending at its last entry.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::position::{MoveLocation, Position};
use crate::rules;
use crate::rules::WinningLine;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Rejection returned by [`Game::apply_move`].
///
/// Every rejection is side-effect free: the history and cursor are
/// exactly as they were, and the caller may simply ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The current snapshot already holds a completed line.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejected {}

/// Rejection returned by [`Game::jump_to`] for a step outside the
/// recorded history. The presentation layer only ever offers valid
/// steps, so this is a defensive contract rather than a reachable
/// user-facing condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Step {step} is out of range for a history of {len} snapshots")]
pub struct OutOfRange {
    /// The rejected step.
    pub step: usize,
    /// History length at the time of the jump.
    pub len: usize,
}

impl std::error::Error for OutOfRange {}

/// Derived status of the currently displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A mark holds a completed line.
    Winner(Mark),
    /// The board is full with no completed line.
    Draw,
    /// Game is open; this mark moves next.
    NextTurn(Mark),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(mark) => write!(f, "Winner: {}", mark),
            Status::Draw => write!(f, "Draw"),
            Status::NextTurn(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// Tic-tac-toe game with a branching move history.
///
/// Exactly two pieces of mutable state: the snapshot history and the
/// cursor into it. Everything else - whose turn it is, the status
/// line, the winning cells - is derived on demand. Snapshot 0 is the
/// empty board; `history[k]` differs from `history[k-1]` in exactly
/// one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) cursor: usize,
}

impl Game {
    /// Creates a new game with an empty board as snapshot 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Number of recorded snapshots (at least 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// The currently displayed step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The mark whose turn it is at the cursor.
    ///
    /// Derived from cursor parity, never stored: X on even steps,
    /// O on odd steps.
    pub fn to_move(&self) -> Mark {
        if self.cursor % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// The snapshot at the cursor.
    pub fn current_board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Plays the cursor's mark at the given position.
    ///
    /// On success the history is truncated to the cursor (discarding
    /// any abandoned future), the new snapshot is appended, and the
    /// cursor advances to it. History and cursor update together or
    /// not at all.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected::GameOver`] if the current snapshot
    /// already holds a completed line, or
    /// [`MoveRejected::CellOccupied`] if the cell is taken. A full
    /// drawn board rejects every position as occupied.
    #[instrument(skip(self), fields(cell = %cell, to_move = ?self.to_move()))]
    pub fn apply_move(&mut self, cell: Position) -> Result<(), MoveRejected> {
        let board = self.current_board();
        if rules::winning_line(board).is_some() {
            return Err(MoveRejected::GameOver);
        }
        if !board.is_empty(cell) {
            return Err(MoveRejected::CellOccupied(cell));
        }

        let mut next = board.clone();
        next.set(cell, Cell::Occupied(self.to_move()));
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "move left the timeline inconsistent"
        );
        Ok(())
    }

    /// Moves the cursor to an earlier or later recorded step.
    ///
    /// The history contents are untouched; turn parity is re-derived
    /// from the new cursor.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] when `step >= len()`; no partial effect.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), OutOfRange> {
        if step >= self.history.len() {
            return Err(OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.cursor = step;
        Ok(())
    }

    /// Status of the snapshot at the cursor.
    ///
    /// The winner check always runs before the draw check.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        if let Some(line) = rules::winning_line(self.current_board()) {
            Status::Winner(line.mark())
        } else if rules::is_full(self.current_board()) {
            Status::Draw
        } else {
            Status::NextTurn(self.to_move())
        }
    }

    /// The completed line on the current snapshot, for highlighting.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.current_board())
    }

    /// The 1-based (column, row) of the move played at `step`.
    ///
    /// Found as the single cell where `history[step]` differs from
    /// `history[step - 1]`. Returns `None` for step 0 (no move was
    /// played) and for steps beyond the recorded history.
    pub fn move_location(&self, step: usize) -> Option<MoveLocation> {
        if step == 0 || step >= self.history.len() {
            return None;
        }
        let previous = &self.history[step - 1];
        let current = &self.history[step];
        Position::iter()
            .find(|pos| current.get(*pos) != previous.get(*pos))
            .map(Position::location)
    }

    /// Recorded snapshots, oldest first. Crate-private: consumers see
    /// only the current board and per-step move locations.
    pub(crate) fn snapshots(&self) -> &[Board] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, cells: &[Position]) {
        for cell in cells {
            game.apply_move(*cell).expect("legal move");
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.len(), 1);
        assert_eq!(game.cursor(), 0);
        assert_eq!(game.status(), Status::NextTurn(Mark::X));
    }

    #[test]
    fn test_marks_alternate() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        game.apply_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Mark::O);
        game.apply_move(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut game = Game::new();
        game.apply_move(Position::Center).unwrap();
        let before = game.clone();

        let result = game.apply_move(Position::Center);
        assert_eq!(result, Err(MoveRejected::CellOccupied(Position::Center)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_move_after_win_rejected_without_change() {
        let mut game = Game::new();
        // X: 0, 4, 8 wins the diagonal; O: 1, 3
        play(
            &mut game,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::Center,
                Position::MiddleLeft,
                Position::BottomRight,
            ],
        );
        assert_eq!(game.status(), Status::Winner(Mark::X));
        let before = game.clone();

        let result = game.apply_move(Position::BottomLeft);
        assert_eq!(result, Err(MoveRejected::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_diagonal_win_scenario() {
        let mut game = Game::new();
        // X takes 0, 4, 8; O answers at 1 and 3
        play(
            &mut game,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::Center,
                Position::MiddleLeft,
                Position::BottomRight,
            ],
        );

        let line = game.winning_line().expect("X holds the diagonal");
        assert_eq!(line.mark(), Mark::X);
        assert_eq!(
            line.cells(),
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
        assert_eq!(game.status(), Status::Winner(Mark::X));
    }

    #[test]
    fn test_draw_scenario() {
        let mut game = Game::new();
        // X O X / O X X / O X O
        play(
            &mut game,
            &[
                Position::TopLeft,      // X
                Position::TopCenter,    // O
                Position::TopRight,     // X
                Position::MiddleLeft,   // O
                Position::Center,       // X
                Position::BottomLeft,   // O
                Position::MiddleRight,  // X
                Position::BottomRight,  // O
                Position::BottomCenter, // X
            ],
        );

        assert_eq!(game.len(), 10);
        assert_eq!(game.status(), Status::Draw);
    }

    #[test]
    fn test_jump_rederives_turn_parity() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                Position::TopLeft,
                Position::Center,
                Position::TopRight,
                Position::BottomLeft,
            ],
        );

        game.jump_to(2).unwrap();
        assert_eq!(game.status(), Status::NextTurn(Mark::X));
        game.jump_to(3).unwrap();
        assert_eq!(game.status(), Status::NextTurn(Mark::O));
        game.jump_to(0).unwrap();
        assert_eq!(game.status(), Status::NextTurn(Mark::X));
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = Game::new();
        game.apply_move(Position::Center).unwrap();

        let result = game.jump_to(2);
        assert_eq!(result, Err(OutOfRange { step: 2, len: 2 }));
        assert_eq!(game.cursor(), 1);
    }

    #[test]
    fn test_branching_discards_abandoned_future() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                Position::TopLeft,
                Position::Center,
                Position::TopRight,
                Position::BottomLeft,
            ],
        );
        assert_eq!(game.len(), 5);
        assert_eq!(game.cursor(), 4);

        game.jump_to(2).unwrap();
        game.apply_move(Position::BottomRight).unwrap();

        // Old steps 3 and 4 are gone; the new move is step 3.
        assert_eq!(game.len(), 4);
        assert_eq!(game.cursor(), 3);
        assert_eq!(
            game.move_location(3),
            Some(Position::BottomRight.location())
        );
        assert_eq!(
            game.current_board().get(Position::BottomRight),
            Cell::Occupied(Mark::X)
        );
        // The abandoned O move at BottomLeft never happened on this branch.
        assert!(game.current_board().is_empty(Position::BottomLeft));
    }

    #[test]
    fn test_move_location_first_move_center() {
        let mut game = Game::new();
        game.apply_move(Position::Center).unwrap();
        assert_eq!(
            game.move_location(1),
            Some(MoveLocation { column: 2, row: 2 })
        );
    }

    #[test]
    fn test_move_location_step_zero_and_out_of_range() {
        let mut game = Game::new();
        game.apply_move(Position::TopRight).unwrap();
        assert_eq!(game.move_location(0), None);
        assert_eq!(game.move_location(2), None);
    }

    #[test]
    fn test_status_text() {
        let mut game = Game::new();
        assert_eq!(game.status().to_string(), "Next player: X");
        game.apply_move(Position::Center).unwrap();
        assert_eq!(game.status().to_string(), "Next player: O");
    }
}

//! Draw detection logic for tic-tac-toe.

use super::win::winning_line;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks if the board is a draw: full with no completed line.
///
/// The winner check always runs first, so a filled board that somehow
/// also holds a completed line is reported as a win, never a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_line(board).is_none()
}

//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};
use serde::Serialize;
use tracing::instrument;

/// A completed line of three equal marks.
///
/// Carries both the three positions (so a UI shell can highlight the
/// winning cells) and the mark occupying them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    cells: [Position; 3],
    mark: Mark,
}

impl WinningLine {
    /// The three positions forming the line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// The mark occupying the line.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Checks whether the given position is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// The 8 winning triples, in fixed evaluation order: rows, columns,
/// diagonals. The order is part of the contract - on a malformed board
/// holding more than one completed line, the first triple in this list
/// is the one reported.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a completed line on the board.
///
/// Returns `Some(line)` for the first triple of three equal non-empty
/// marks in the fixed evaluation order, `None` otherwise - regardless
/// of how many cells are filled.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for [a, b, c] in LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Occupied(mark) = cell {
                return Some(WinningLine {
                    cells: [a, b, c],
                    mark,
                });
            }
        }
    }

    None
}

//! Board positions and 1-based move locations.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// The enum is the bounds check: there is no way to express an
/// out-of-range cell index, so move validation only has to consider
/// occupancy and game state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to flat board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from flat board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// 1-based column of this position (1-3).
    pub fn column(self) -> u8 {
        (self.index() % 3) as u8 + 1
    }

    /// 1-based row of this position (1-3).
    pub fn row(self) -> u8 {
        (self.index() / 3) as u8 + 1
    }

    /// The 1-based (column, row) location of this position.
    pub fn location(self) -> MoveLocation {
        MoveLocation {
            column: self.column(),
            row: self.row(),
        }
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Filters positions by board state - returns only empty cells.
    ///
    /// This is what a UI shell enumerates to decide which cells are
    /// still clickable.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 1-based column/row of a played move, for history labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveLocation {
    /// Column of the move (1-3, left to right).
    pub column: u8,
    /// Row of the move (1-3, top to bottom).
    pub row: u8,
}

impl std::fmt::Display for MoveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(col: {}, row: {})", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 0..9 {
            let pos = Position::from_index(index).unwrap();
            assert_eq!(pos.index(), index);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_all_matches_iteration_order() {
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL);
    }

    #[test]
    fn test_center_location() {
        // Flat index 4 sits in the middle of the grid
        assert_eq!(
            Position::Center.location(),
            MoveLocation { column: 2, row: 2 }
        );
    }

    #[test]
    fn test_corner_locations() {
        assert_eq!(Position::TopLeft.location(), MoveLocation { column: 1, row: 1 });
        assert_eq!(
            Position::BottomRight.location(),
            MoveLocation { column: 3, row: 3 }
        );
        assert_eq!(
            Position::MiddleRight.location(),
            MoveLocation { column: 3, row: 2 }
        );
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Position::Center.location().to_string(), "(col: 2, row: 2)");
    }

    #[test]
    fn test_valid_moves_empty_board() {
        let board = Board::new();
        assert_eq!(Position::valid_moves(&board).len(), 9);
    }
}

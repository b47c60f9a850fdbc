//! Single-cell step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::history::Game;
use crate::types::Cell;

/// Invariant: adjacent snapshots differ in exactly one cell, and that
/// cell goes from empty to occupied.
///
/// This is what makes `move_location` well defined for every step
/// after 0, and what rules out edits to already-recorded boards.
pub struct SingleCellStepInvariant;

impl Invariant<Game> for SingleCellStepInvariant {
    fn holds(game: &Game) -> bool {
        game.snapshots().windows(2).all(|pair| {
            let changed: Vec<(Cell, Cell)> = pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells().iter())
                .filter(|(before, after)| before != after)
                .map(|(before, after)| (*before, *after))
                .collect();

            matches!(
                changed.as_slice(),
                [(Cell::Empty, Cell::Occupied(_))]
            )
        })
    }

    fn description() -> &'static str {
        "Adjacent snapshots differ by exactly one newly placed mark"
    }
}

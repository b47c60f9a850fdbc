//! Cursor bounds invariant: the cursor always names a recorded snapshot.

use super::Invariant;
use crate::history::Game;

/// Invariant: `cursor < history length`.
///
/// The history is never empty (snapshot 0 is the empty board), so the
/// cursor always has a snapshot to display.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        !game.snapshots().is_empty() && game.cursor() < game.snapshots().len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}

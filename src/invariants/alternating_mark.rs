//! Alternating mark invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::history::Game;
use crate::types::{Cell, Mark};

/// Invariant: snapshot `k` holds `ceil(k / 2)` X marks and
/// `floor(k / 2)` O marks.
///
/// X moves on even steps and O on odd steps, so the counts pin down
/// the alternation without storing whose turn it was.
pub struct AlternatingMarkInvariant;

impl Invariant<Game> for AlternatingMarkInvariant {
    fn holds(game: &Game) -> bool {
        game.snapshots().iter().enumerate().all(|(step, board)| {
            let x_count = board
                .cells()
                .iter()
                .filter(|c| **c == Cell::Occupied(Mark::X))
                .count();
            let o_count = board
                .cells()
                .iter()
                .filter(|c| **c == Cell::Occupied(Mark::O))
                .count();

            x_count == step.div_ceil(2) && o_count == step / 2
        })
    }

    fn description() -> &'static str {
        "Marks alternate starting with X (snapshot k holds ceil(k/2) X's)"
    }
}

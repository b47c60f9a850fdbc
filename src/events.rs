//! Discrete UI events and the presentation-facing move list.
//!
//! Clicks arrive as explicit event values rather than per-cell
//! callbacks, so event identity is decoupled from whatever rendering
//! mechanism the shell uses.

use crate::history::Game;
use crate::position::{MoveLocation, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A discrete gesture forwarded by the presentation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UiEvent {
    /// A cell was selected on the board.
    Move {
        /// The selected cell.
        cell: Position,
    },
    /// A history entry was selected.
    Jump {
        /// The selected step.
        step: usize,
    },
    /// The move-list order toggle was pressed.
    ToggleOrder,
}

/// Presentation order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl MoveOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// One entry in the selectable history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// The step this entry jumps to.
    pub step: usize,
    /// Where the step's move was played; `None` for step 0.
    pub location: Option<MoveLocation>,
    /// Whether this step is the one currently displayed.
    pub selected: bool,
}

/// A game plus the move-list order toggle: the unit a UI shell owns.
///
/// The order is presentation state only - toggling it never touches
/// the game's history or cursor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSession {
    game: Game,
    order: MoveOrder,
}

impl GameSession {
    /// Creates a session with a fresh game and ascending move list.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            order: MoveOrder::Ascending,
        }
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The current move-list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Routes an event to the game or the order toggle.
    ///
    /// Rejected moves and out-of-range jumps are absorbed: the shell
    /// sees the board simply not change, and the rejection is only
    /// logged.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Move { cell } => {
                if let Err(rejected) = self.game.apply_move(cell) {
                    debug!(%rejected, "move absorbed");
                }
            }
            UiEvent::Jump { step } => {
                if let Err(rejected) = self.game.jump_to(step) {
                    debug!(%rejected, "jump absorbed");
                }
            }
            UiEvent::ToggleOrder => {
                self.order = self.order.toggled();
            }
        }
    }

    /// The history entries to render, in the current order.
    ///
    /// One entry per recorded step, each carrying the step number, the
    /// move's (column, row) location, and whether it is the selected
    /// cursor.
    pub fn moves(&self) -> Vec<MoveListEntry> {
        let mut entries: Vec<MoveListEntry> = (0..self.game.len())
            .map(|step| MoveListEntry {
                step,
                location: self.game.move_location(step),
                selected: step == self.game.cursor(),
            })
            .collect();

        if self.order == MoveOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

//! Pure tic-tac-toe game logic with a branching, time-travelling
//! move history.
//!
//! # Architecture
//!
//! - **Rules**: stateless win/draw evaluation over a single board
//! - **History**: the [`Game`] controller - append-only snapshots,
//!   a movable cursor, and turn parity derived from it
//! - **Events**: discrete UI gestures dispatched to a [`GameSession`]
//!
//! The rendering shell is deliberately absent: it owns a
//! [`GameSession`], forwards each gesture as a [`UiEvent`], and reads
//! back the current board, status line, winning cells, and move list.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameSession, Position, UiEvent};
//!
//! let mut session = GameSession::new();
//! session.dispatch(UiEvent::Move { cell: Position::Center });
//! session.dispatch(UiEvent::Move { cell: Position::TopLeft });
//!
//! // Travel back: the first move is displayed again, O to play
//! session.dispatch(UiEvent::Jump { step: 1 });
//! assert_eq!(session.game().status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod events;
mod history;
pub mod invariants;
mod position;
mod rules;
mod types;

pub use events::{GameSession, MoveListEntry, MoveOrder, UiEvent};
pub use history::{Game, MoveRejected, OutOfRange, Status};
pub use position::{MoveLocation, Position};
pub use rules::{WinningLine, is_draw, is_full, winning_line};
pub use types::{Board, Cell, Mark};

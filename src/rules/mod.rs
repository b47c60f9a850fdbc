//! Win and draw evaluation over recorded boards.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, winning_line};

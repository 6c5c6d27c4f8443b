//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Nothing here holds state;
//! the controller asks these rules about whichever snapshot is current.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_blocked;
pub use outcome::{Outcome, evaluate};
pub use win::{LINES, Line, check_winner};

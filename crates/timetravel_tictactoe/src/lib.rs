//! Tic-tac-toe with a branchable, time-travelling move history.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] classifies a board as in progress, won or drawn
//! - **Controller**: [`GameController`] keeps every snapshot played so far,
//!   a cursor into them and the move-list display order
//! - **Render data**: [`RenderData`] is derived from the controller on
//!   demand for whatever frontend draws the game
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameController, Position};
//!
//! let mut game = GameController::new();
//! game.attempt_move(Position::Center);
//! game.attempt_move(Position::TopLeft);
//!
//! // Go back one move and branch.
//! game.jump_to(1);
//! game.attempt_move(Position::BottomRight);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod controller;
mod history;
pub mod invariants;
mod position;
mod render;
pub mod rules;
mod types;

pub use action::{Move, MoveError, StateError};
pub use controller::GameController;
pub use history::{History, HistoryEntry, NO_MOVE};
pub use position::Position;
pub use render::{MoveListItem, RenderData, move_label, move_list, status_text};
pub use rules::{LINES, Line, Outcome, evaluate};
pub use types::{Board, BoardParseError, Player, Square};

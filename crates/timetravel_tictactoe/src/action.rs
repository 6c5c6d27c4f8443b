//! First-class move and move-rejection types.
//!
//! A move is a domain event: who marked which square. Its `Display`
//! form is the description stored alongside the resulting snapshot.

use super::rules::Outcome;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    /// Formats as `X: (col, row)`, e.g. `X: (1, 1)` for the center.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: ({}, {})",
            self.player,
            self.position.col(),
            self.position.row()
        )
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The current snapshot is already won or drawn.
    #[display("Game is already over: {}", _0)]
    GameDecided(Outcome),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Why a deserialized history or game state was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// The history has no entries at all.
    #[display("History has no entries")]
    EmptyHistory,

    /// Entry 0 is not the empty board described as `No Move.`.
    #[display("History does not start with the empty board")]
    MissingInitialEntry,

    /// One or more history invariants do not hold.
    #[display("Invariants violated: {}", _0.join("; "))]
    Violations(Vec<String>),
}

impl std::error::Error for StateError {}

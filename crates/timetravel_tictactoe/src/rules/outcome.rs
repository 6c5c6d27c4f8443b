//! Board classification: in progress, won, or drawn.

use super::super::{Board, Player};
use super::draw::is_blocked;
use super::win::{LINES, Line, check_winner};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Classification of a single board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one line can still be completed.
    InProgress,
    /// A player holds a full line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Every line holds both marks, so nobody can win any more.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line of a win.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies a board.
///
/// Lines are scanned in [`LINES`] order and the first completed line is
/// returned as the win. Without a win, the board is a draw as soon as every
/// line is blocked, which can happen before the board is full.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        trace!(%player, ?line, "Completed line");
        return Outcome::Win { player, line };
    }

    if LINES.iter().all(|line| is_blocked(board, line)) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

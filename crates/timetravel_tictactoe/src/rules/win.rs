//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions that win when held by one player.
pub type Line = [Position; 3];

/// Every winning line, in the order they are checked.
///
/// When a board holds more than one completed line the first one in this
/// table is reported.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player holding all three squares of `line`, if any.
pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let [a, b, c] = *line;
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the player and the first completed line in [`LINES`] order.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Player, Line)> {
    LINES
        .iter()
        .find_map(|line| line_owner(board, line).map(|player| (player, *line)))
}

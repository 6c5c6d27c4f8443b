//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use super::win::Line;

/// A line is blocked once both players have a mark on it.
///
/// Nobody can complete a blocked line, whatever is played next.
pub fn is_blocked(board: &Board, line: &Line) -> bool {
    let holds = |player| {
        line.iter()
            .any(|pos| board.get(*pos) == Square::Occupied(player))
    };
    holds(Player::X) && holds(Player::O)
}

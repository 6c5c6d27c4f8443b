//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameController, Player, Square};
use super::Invariant;

/// Invariant: the square filled at step `k` holds X when `k` is odd and
/// O when `k` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameController> for AlternatingTurnInvariant {
    fn holds(game: &GameController) -> bool {
        game.history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let expected = if k % 2 == 0 { Player::X } else { Player::O };
                let (before, after) = (pair[0].snapshot(), pair[1].snapshot());
                before
                    .changed_positions(after)
                    .iter()
                    .all(|pos| after.get(*pos) == Square::Occupied(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

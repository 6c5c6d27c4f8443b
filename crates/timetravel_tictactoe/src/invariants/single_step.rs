//! Single step invariant: each entry adds exactly one mark.

use super::super::{GameController, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square,
/// which goes from empty to occupied.
///
/// Earlier snapshots are therefore never rewritten by a later move.
pub struct SingleStepInvariant;

impl Invariant<GameController> for SingleStepInvariant {
    fn holds(game: &GameController) -> bool {
        game.history().entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].snapshot(), pair[1].snapshot());
            match before.changed_positions(after).as_slice() {
                [pos] => before.get(*pos) == Square::Empty && after.get(*pos) != Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry fills exactly one previously empty square"
    }
}

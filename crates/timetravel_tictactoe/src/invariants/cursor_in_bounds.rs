//! Cursor invariant: the cursor always selects an existing entry.

use super::super::GameController;
use super::Invariant;

/// Invariant: `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameController> for CursorInBoundsInvariant {
    fn holds(game: &GameController) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at an existing history entry"
    }
}

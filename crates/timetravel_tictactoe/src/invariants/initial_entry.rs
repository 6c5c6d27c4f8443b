//! Initial entry invariant: history starts from an empty board.

use super::super::history::HistoryEntry;
use super::super::GameController;
use super::Invariant;

/// Invariant: entry 0 is the empty board described as `No Move.`.
pub struct InitialEntryInvariant;

impl Invariant<GameController> for InitialEntryInvariant {
    fn holds(game: &GameController) -> bool {
        game.history().get(0) == Some(&HistoryEntry::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board and \"No Move.\""
    }
}

//! Branchable move history.

use super::action::{Move, StateError};
use super::types::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Description of the initial entry.
pub const NO_MOVE: &str = "No Move.";

/// One recorded snapshot and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct HistoryEntry {
    /// Board after the move.
    snapshot: Board,
    /// Move description, or [`NO_MOVE`] for the first entry.
    description: String,
}

impl HistoryEntry {
    /// The empty-board entry every history starts with.
    pub fn initial() -> Self {
        Self::new(Board::new(), NO_MOVE.to_string())
    }

    /// Entry for `mov` played on top of `previous`.
    pub fn after(previous: &Board, mov: Move) -> Self {
        Self::new(previous.with_mark(mov.position, mov.player), mov.to_string())
    }
}

/// Ordered, never-empty list of history entries.
///
/// Entry 0 is always [`HistoryEntry::initial`]. The only mutation is
/// [`History::truncate_and_push`], which drops everything after a step
/// before appending. Deserializing rejects an empty list and a list whose
/// first entry is not the initial one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRepr")]
pub struct History {
    pub(crate) entries: Vec<HistoryEntry>,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct HistoryRepr {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<HistoryRepr> for History {
    type Error = StateError;

    fn try_from(repr: HistoryRepr) -> Result<Self, Self::Error> {
        match repr.entries.first() {
            None => Err(StateError::EmptyHistory),
            Some(first) if *first != HistoryEntry::initial() => {
                Err(StateError::MissingInitialEntry)
            }
            Some(_) => Ok(Self {
                entries: repr.entries,
            }),
        }
    }
}

impl History {
    /// History holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the initial entry is always present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// The most recent entry.
    pub fn last(&self) -> &HistoryEntry {
        // `entries` is never empty
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Discards entries after `step`, then appends `entry`.
    #[instrument(skip(self, entry), fields(len = self.entries.len(), description = %entry.description))]
    pub(crate) fn truncate_and_push(&mut self, step: usize, entry: HistoryEntry) {
        let discarded = self.entries.len().saturating_sub(step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future branch");
        }
        self.entries.truncate(step + 1);
        self.entries.push(entry);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

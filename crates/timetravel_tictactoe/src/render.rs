//! Render-data derivation.
//!
//! Everything a frontend needs to draw one frame, recomputed from the
//! controller state on every query. Nothing here is cached.

use super::history::History;
use super::rules::{Line, Outcome};
use super::{Board, GameController, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveListItem {
    /// History step this row jumps to.
    step: usize,
    /// Button text plus the move description,
    /// e.g. `Go to move #1 - X: (1, 1)`.
    label: String,
    /// Whether this is the step being shown (drawn emphasized).
    is_current: bool,
}

/// The full bundle a frontend draws from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RenderData {
    /// Snapshot at the cursor.
    snapshot: Board,
    /// Classification of that snapshot.
    outcome: Outcome,
    /// `Winner: X`, `Draw.` or `Next player: O`.
    status_text: String,
    /// Move list in display order.
    move_list: Vec<MoveListItem>,
    /// Winning line to highlight, if any.
    highlighted_cells: Option<Line>,
    /// Player who moves next from the cursor.
    next_player: Player,
    /// Current history step.
    cursor: usize,
    /// Whether the move list is reversed.
    reverse_display: bool,
}

impl RenderData {
    /// Derives render data from the controller's current state.
    #[instrument(skip(game), fields(cursor = game.cursor()))]
    pub fn from_controller(game: &GameController) -> Self {
        let outcome = game.outcome();
        Self {
            snapshot: *game.current_snapshot(),
            outcome,
            status_text: status_text(&outcome, game.next_player()),
            move_list: move_list(game.history(), game.cursor(), game.reverse_display()),
            highlighted_cells: outcome.winning_line(),
            next_player: game.next_player(),
            cursor: game.cursor(),
            reverse_display: game.reverse_display(),
        }
    }
}

/// Status line for an outcome.
pub fn status_text(outcome: &Outcome, next_player: Player) -> String {
    match outcome {
        Outcome::Win { player, .. } => format!("Winner: {}", player),
        Outcome::Draw => "Draw.".to_string(),
        Outcome::InProgress => format!("Next player: {}", next_player),
    }
}

/// Label of the move-list row for `step`.
pub fn move_label(step: usize, description: &str) -> String {
    if step == 0 {
        format!("Go to game start - {}", description)
    } else {
        format!("Go to move #{} - {}", step, description)
    }
}

/// Move list in insertion order, or simply reversed when `reverse` is set.
#[instrument(skip(history))]
pub fn move_list(history: &History, cursor: usize, reverse: bool) -> Vec<MoveListItem> {
    let mut items: Vec<_> = history
        .entries()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveListItem::new(step, move_label(step, entry.description()), step == cursor))
        .collect();

    if reverse {
        items.reverse();
    }
    items
}

//! Game history controller.
//!
//! Holds the history, the cursor into it and the move-list display order.
//! Whose turn it is comes from cursor parity alone: X moves whenever the
//! cursor is even. There is no separately stored turn flag to drift out
//! of sync.

use super::action::{Move, MoveError, StateError};
use super::contracts::{Contract, MoveContract};
use super::history::{History, HistoryEntry};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::render::{self, MoveListItem, RenderData};
use super::rules::{Line, Outcome, evaluate};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Time-travelling tic-tac-toe state machine.
///
/// A deserialized controller is checked against [`HistoryInvariants`]
/// before it is handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameControllerRepr")]
pub struct GameController {
    pub(crate) history: History,
    pub(crate) cursor: usize,
    pub(crate) reverse_display: bool,
}

/// Unchecked wire form of [`GameController`].
#[derive(Deserialize)]
struct GameControllerRepr {
    history: History,
    cursor: usize,
    reverse_display: bool,
}

impl TryFrom<GameControllerRepr> for GameController {
    type Error = StateError;

    fn try_from(repr: GameControllerRepr) -> Result<Self, Self::Error> {
        let game = Self {
            history: repr.history,
            cursor: repr.cursor,
            reverse_display: repr.reverse_display,
        };
        HistoryInvariants::check_all(&game).map_err(|violations| {
            StateError::Violations(violations.into_iter().map(|v| v.description).collect())
        })?;
        Ok(game)
    }
}

impl GameController {
    /// Creates a game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            cursor: 0,
            reverse_display: false,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Plays the next player's mark at `pos` on the current snapshot.
    ///
    /// Returns `false` and leaves the state untouched when the snapshot is
    /// already won or drawn, or when the square is taken. An accepted move
    /// discards every entry after the cursor before appending, so moving
    /// after a jump starts a new branch.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn attempt_move(&mut self, pos: Position) -> bool {
        if let Err(reason) = self.check_move(pos) {
            debug!(%reason, "Ignoring move");
            return false;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mov = Move::new(self.next_player(), pos);
        let entry = HistoryEntry::after(self.current_snapshot(), mov);
        self.history.truncate_and_push(self.cursor, entry);
        self.cursor = self.history.len() - 1;
        info!(%mov, step = self.cursor, "Move accepted");

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(
                post.is_ok(),
                "MoveContract postcondition failed after {}: {:?}",
                mov,
                post
            );
        }

        true
    }

    /// Explains why [`attempt_move`](Self::attempt_move) would ignore `pos`.
    pub fn check_move(&self, pos: Position) -> Result<(), MoveError> {
        MoveContract::pre(self, &pos)
    }

    /// Moves the cursor to `step` without touching the history.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not an existing history step. Callers only offer
    /// steps taken from [`move_list`](Self::move_list).
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) {
        assert!(
            step < self.history.len(),
            "jump_to({}) out of range: history has {} entries",
            step,
            self.history.len()
        );
        self.cursor = step;
        debug!(next = %self.next_player(), "Cursor moved");
    }

    /// Flips the move-list display order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.reverse_display = !self.reverse_display;
        debug!(reverse = self.reverse_display, "Move order toggled");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current history step.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.cursor % 2 == 0
    }

    /// Player who moves next.
    pub fn next_player(&self) -> Player {
        if self.x_is_next() { Player::X } else { Player::O }
    }

    /// Whether the move list is shown newest first.
    pub fn reverse_display(&self) -> bool {
        self.reverse_display
    }

    /// Snapshot at the cursor.
    pub fn current_snapshot(&self) -> &Board {
        // `cursor < history.len()` is kept by every transition
        self.history.entries()[self.cursor].snapshot()
    }

    /// Classification of the current snapshot.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_snapshot())
    }

    /// Status line for the current snapshot.
    pub fn status_text(&self) -> String {
        render::status_text(&self.outcome(), self.next_player())
    }

    /// Move list in display order.
    pub fn move_list(&self) -> Vec<MoveListItem> {
        render::move_list(&self.history, self.cursor, self.reverse_display)
    }

    /// Winning line of the current snapshot, if any.
    pub fn highlighted_cells(&self) -> Option<Line> {
        self.outcome().winning_line()
    }

    /// Everything needed to draw one frame.
    pub fn render(&self) -> RenderData {
        RenderData::from_controller(self)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

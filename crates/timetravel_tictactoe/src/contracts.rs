//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::evaluate;
use super::{GameController, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The current snapshot is neither won nor drawn.
pub struct GameNotDecided;

impl GameNotDecided {
    /// Fails with the outcome when the current snapshot is decided.
    #[instrument(skip(game))]
    pub fn check(game: &GameController) -> Result<(), MoveError> {
        let outcome = evaluate(game.current_snapshot());
        if outcome.is_decided() {
            Err(MoveError::GameDecided(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails when `pos` is occupied in the current snapshot.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameController) -> Result<(), MoveError> {
        if game.current_snapshot().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is undecided and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameController) -> Result<(), MoveError> {
        GameNotDecided::check(game)?;
        SquareIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for accepted moves.
///
/// Preconditions:
/// - Game not yet decided
/// - Square must be empty
///
/// Postconditions:
/// - History was cut back to the old cursor and grew by one entry
/// - Cursor points at the new last entry
/// - All history invariants hold
pub struct MoveContract;

impl Contract<GameController, Position> for MoveContract {
    fn pre(game: &GameController, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, game)
    }

    fn post(before: &GameController, after: &GameController) -> Result<(), MoveError> {
        let expected_len = before.cursor() + 2;
        if after.history().len() != expected_len {
            warn!(
                expected_len,
                actual_len = after.history().len(),
                "History length after move is wrong"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} entries, found {}",
                expected_len,
                after.history().len()
            )));
        }

        if after.cursor() != expected_len - 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: cursor {} is not at the new entry",
                after.cursor()
            )));
        }

        // Entries up to the old cursor are carried over untouched.
        let kept = &before.history().entries()[..=before.cursor()];
        if &after.history().entries()[..=before.cursor()] != kept {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: earlier snapshots changed".to_string(),
            ));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Outcome, Player};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameController::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = GameController::new();
        game.attempt_move(Position::Center);

        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_decided_game() {
        let mut game = GameController::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.attempt_move(pos);
        }

        assert!(matches!(
            MoveContract::pre(&game, &Position::BottomRight),
            Err(MoveError::GameDecided(Outcome::Win {
                player: Player::X,
                ..
            }))
        ));
    }

    #[test]
    fn test_decided_check_runs_before_occupied_check() {
        let mut game = GameController::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            game.attempt_move(pos);
        }

        assert!(matches!(
            MoveContract::pre(&game, &Position::TopLeft),
            Err(MoveError::GameDecided(_))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameController::new();
        let mut after = before.clone();
        after.attempt_move(Position::Center);

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_branching_move() {
        let mut before = GameController::new();
        before.attempt_move(Position::TopLeft);
        before.attempt_move(Position::TopCenter);
        before.attempt_move(Position::TopRight);
        before.jump_to(1);

        let mut after = before.clone();
        after.attempt_move(Position::Center);

        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameController::new();
        let mut after = before.clone();
        after.attempt_move(Position::Center);

        // Rewrite the new entry with O's mark in X's turn.
        let forged = before.current_snapshot().with_mark(Position::Center, Player::O);
        after.history.entries[1] = HistoryEntry::new(forged, "O: (1, 1)".to_string());

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_missing_entry() {
        let before = GameController::new();
        let after = before.clone();

        assert!(MoveContract::post(&before, &after).is_err());
    }
}

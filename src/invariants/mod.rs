//! First-class invariants for the history log.
//!
//! Invariants are logical properties that must hold throughout game
//! execution. They are testable independently and serve as
//! documentation of system guarantees.

use crate::game::Game;
use tracing::instrument;

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod cursor_bounds;
pub mod seeded_log;
pub mod single_step;

pub use cursor_bounds::CursorInBoundsInvariant;
pub use seeded_log::SeededLogInvariant;
pub use single_step::SingleStepInvariant;

/// All history-log invariants as a composable set.
pub type ReplayInvariants = (
    SeededLogInvariant,
    SingleStepInvariant,
    CursorInBoundsInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(game))]
pub fn assert_invariants(game: &Game) {
    debug_assert!(
        ReplayInvariants::check_all(game).is_ok(),
        "History invariants violated: {:?}",
        ReplayInvariants::check_all(game).unwrap_err()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Game, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = Game::new();
        assert!(ReplayInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);
        game.play(Position::TopRight);

        assert!(ReplayInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_jump_and_branch() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);
        game.jump_to(1).unwrap();
        game.play(Position::BottomRight);

        assert!(ReplayInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::new();
        game.play(Position::Center);

        // Corrupt the latest snapshot with an extra mark.
        game.history[1].set(Position::TopLeft, Square::Occupied(Player::O));

        let result = ReplayInvariants::check_all(&game);
        assert!(result.is_err());
        assert!(!result.unwrap_err().is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let game = Game::new();

        type TwoInvariants = (SeededLogInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&game).is_ok());
    }
}

//! Seeded log invariant: the history always starts from the empty board.

use super::Invariant;
use crate::game::Game;
use crate::types::Square;

/// Invariant: Entry 0 of the history log exists and is the empty board.
///
/// Every game session begins from the same seed snapshot; truncation
/// never removes it because truncation keeps entries up to the cursor.
pub struct SeededLogInvariant;

impl Invariant<Game> for SeededLogInvariant {
    fn holds(game: &Game) -> bool {
        match game.history().first() {
            Some(board) => board.squares().iter().all(|s| *s == Square::Empty),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History log starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(SeededLogInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.play(Position::TopLeft);
        assert!(SeededLogInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_seed_violates() {
        let mut game = Game::new();
        game.play(Position::Center);

        game.history[0].set(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!SeededLogInvariant::holds(&game));
    }

    #[test]
    fn test_empty_log_violates() {
        let mut game = Game::new();
        game.history.clear();
        assert!(!SeededLogInvariant::holds(&game));
    }
}

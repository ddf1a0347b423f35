//! Single-step invariant: each history entry applies exactly one legal move.

use super::Invariant;
use crate::game::Game;
use crate::types::{Player, Square};

/// Invariant: Adjacent history entries differ in exactly one square.
///
/// The changed square goes from empty to occupied, and the occupying
/// mark alternates: the move producing entry i+1 belongs to X when i
/// is even, O when i is odd.
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        for (i, window) in game.history().windows(2).enumerate() {
            let (prev, next) = (&window[0], &window[1]);

            let mut changed = Vec::new();
            for (pos, (a, b)) in prev.squares().iter().zip(next.squares()).enumerate() {
                if a != b {
                    changed.push((pos, *a, *b));
                }
            }

            if changed.len() != 1 {
                return false;
            }

            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            let (_, before, after) = changed[0];
            if before != Square::Empty || after != Square::Occupied(expected) {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one alternating mark to its predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_alternating_moves() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);
        game.play(Position::TopRight);
        game.play(Position::BottomLeft);

        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = Game::new();
        game.play(Position::Center);

        // Two marks appear between entries 0 and 1.
        game.history[1].set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_parity_mark_violates() {
        let mut game = Game::new();
        game.play(Position::Center);

        // First move must be X.
        game.history[1].set(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_cleared_square_violates() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.play(Position::TopLeft);

        // A mark vanishes between entries 1 and 2.
        game.history[2].set(Position::Center, Square::Empty);
        assert!(!SingleStepInvariant::holds(&game));
    }
}

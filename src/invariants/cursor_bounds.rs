//! Cursor bounds invariant: the cursor always names an existing entry.

use super::Invariant;
use crate::game::Game;

/// Invariant: The cursor is a valid index into the history log.
///
/// Truncation keeps entries up to the cursor and appending advances
/// the cursor to the new last entry, so the cursor can never point
/// past the end.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.cursor() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor indexes an existing history entry"
    }
}

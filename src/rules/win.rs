//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning lines in fixed scan order: rows, then columns,
/// then diagonals. Scan order determines which line is reported
/// when more than one is complete.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    /// The player with three in a row.
    pub player: Player,
    /// The three positions forming the line.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Checks whether the given position lies on the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the player with three in a row together with the line
/// they completed, or `None` if no line is complete. The first
/// complete line in scan order wins.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(WinningLine {
                    player,
                    line: [a, b, c],
                });
            }
        }
    }

    None
}

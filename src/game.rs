//! History-tracking game engine with time-travel navigation.
//!
//! The engine owns the history log (one board snapshot per move), the
//! cursor selecting the displayed board, and the move-list sort order.
//! Whose turn it is and whether the game is over are derived from the
//! log and cursor on every query, never stored, so rewinding the
//! cursor cannot leave stale flags behind.

use crate::invariants::assert_invariants;
use crate::moves::{self, MoveEntry, SortOrder};
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when navigating the history log.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested move index is outside the history log.
    #[display("Move {} is out of range (history has {} entries)", _0, _1)]
    MoveOutOfRange(usize, usize),
}

impl std::error::Error for HistoryError {}

/// Current status of the game, derived from the board at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the given player moves next.
    InProgress(Player),
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "Next player: {player}"),
            GameStatus::Won(player) => write!(f, "Winner: {player}"),
            GameStatus::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Tic-tac-toe game with full move history.
///
/// Every move appends a board snapshot to the log; jumping rewinds the
/// cursor without discarding anything. Playing from a rewound cursor
/// truncates the abandoned future before appending, branching the game
/// from that point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots, entry 0 always the empty board.
    pub(crate) history: Vec<Board>,
    /// Index of the displayed board.
    pub(crate) cursor: usize,
    /// Move-list display ordering.
    pub(crate) sort: SortOrder,
}

impl Game {
    /// Creates a new game with an empty board and an empty move history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
            sort: SortOrder::Ascending,
        }
    }

    /// Returns the board at the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Returns all board snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the cursor (number of moves applied up to the displayed board).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the move-list sort order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Returns the player who moves next from the displayed board.
    ///
    /// X moves on even cursors, O on odd ones. Deriving this from the
    /// cursor keeps the turn correct after any history jump.
    pub fn to_move(&self) -> Player {
        if self.cursor % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winning line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self.board())
    }

    /// Returns the game status for the displayed board.
    ///
    /// Recomputed on every call.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.winning_line() {
            GameStatus::Won(win.player)
        } else if rules::is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.to_move())
        }
    }

    /// Plays the next player's mark at the given position.
    ///
    /// Illegal moves are ignored without touching any state: a move is
    /// illegal if the target square is occupied or the displayed board
    /// already has a winner. A legal move discards any entries after
    /// the cursor, appends the new board, and advances the cursor to it.
    #[instrument(skip(self), fields(position = ?pos, player = ?self.to_move()))]
    pub fn play(&mut self, pos: Position) {
        if !self.board().is_empty(pos) {
            debug!("ignoring move to occupied square");
            return;
        }
        if self.winning_line().is_some() {
            debug!("ignoring move on decided game");
            return;
        }

        let player = self.to_move();
        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(player));

        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        assert_invariants(self);
    }

    /// Moves the cursor to the given move number.
    ///
    /// The log is left untouched; only the displayed board changes.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] if `mov` does not name
    /// an existing history entry.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mov: usize) -> Result<(), HistoryError> {
        if mov >= self.history.len() {
            return Err(HistoryError::MoveOutOfRange(mov, self.history.len()));
        }
        self.cursor = mov;
        Ok(())
    }

    /// Flips the move-list sort order.
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    /// Returns the move list in the active sort order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        moves::move_list(self.history.len(), self.cursor, self.sort)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

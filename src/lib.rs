//! Tic-tac-toe game logic with move history and time-travel navigation.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **Game**: history log of board snapshots, a cursor for time travel,
//!   and branching when a move is played from a rewound cursor
//! - **Moves**: stateless move-list labels with a sort-order toggle
//! - **Invariants**: first-class, independently testable properties of
//!   the history log, asserted in debug builds
//!
//! Rendering is deliberately out of scope: a front end feeds user
//! actions into [`Game`] and redraws from its accessors.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center);
//! game.play(Position::TopLeft);
//! assert_eq!(game.status(), GameStatus::InProgress(Player::X));
//!
//! // Rewind one move and branch from there.
//! game.jump_to(1)?;
//! game.play(Position::BottomRight);
//! assert_eq!(game.history().len(), 3);
//! # Ok::<(), tictactoe_replay::HistoryError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod moves;
mod position;
mod types;

// Public rule and invariant modules
pub mod invariants;
pub mod rules;

// Crate-level exports - Game engine
pub use game::{Game, GameStatus, HistoryError};

// Crate-level exports - Move-list presentation
pub use moves::{MoveEntry, SortOrder, move_list};

// Crate-level exports - Domain types
pub use position::Position;
pub use rules::{WinningLine, winning_line};
pub use types::{Board, Player, Square};

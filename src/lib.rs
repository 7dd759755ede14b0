//! # kalah
//!
//! Rule engine for Kalah, the six-pit, four-counter Mancala.
//!
//! ## Design Principles
//!
//! 1. **One mutable state**: a [`Game`] holds the board, the player to move
//!    and the finished flag. Only [`rules::apply_move`] changes it.
//!
//! 2. **Positions by index, sides by type**: the board is a fixed 14-slot
//!    array; which slots belong to whom is answered by [`Player`].
//!
//! 3. **Atomic moves**: a move is validated first and then runs sowing,
//!    capture, termination and turn passing to completion. A rejected
//!    move leaves the game untouched.
//!
//! ## Example
//!
//! ```
//! use kalah::{apply_move, new_game, valid_moves, Player};
//!
//! let mut game = new_game();
//! assert_eq!(valid_moves(&game).as_slice(), &[0, 1, 2, 3, 4, 5]);
//!
//! // Four counters from pit 2 end in player one's store: extra turn.
//! apply_move(&mut game, 2).unwrap();
//! assert_eq!(game.turn(), Player::PlayerOne);
//!
//! // Stores and pits on the other side are never legal.
//! assert!(apply_move(&mut game, 6).is_err());
//! assert!(apply_move(&mut game, 9).is_err());
//! ```
//!
//! ## Modules
//!
//! - `core`: players, board, game state, RNG
//! - `rules`: validation, sowing, capture, termination, queries
//! - `agents`: move-choosers (uniform random, first legal pit)
//! - `render`: text rendering of a game
//! - `session`: plays whole games between two choosers

pub mod agents;
pub mod core;
pub mod render;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Game, GameRng, Player};

pub use crate::rules::{
    apply_move, new_game, result, scores, valid_moves, GameResult, InvalidMove, ValidMoves,
};

pub use crate::agents::{FirstMoveAgent, MoveChooser, RandomAgent};

pub use crate::session::{
    run_match, run_series, MatchConfig, MatchSummary, SeriesSummary, SessionError,
};

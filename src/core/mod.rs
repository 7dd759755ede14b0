//! Core types: players, board, game state, RNG.
//!
//! Pure storage. Rule logic lives in [`crate::rules`].

pub mod board;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{
    Board, INITIAL_COUNTERS, PITS_PER_SIDE, SLOT_COUNT, STORE_ONE, STORE_TWO, TOTAL_COUNTERS,
};
pub use player::Player;
pub use rng::GameRng;
pub use state::Game;

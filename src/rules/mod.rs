//! Kalah rules.
//!
//! - [`engine`]: validation, the move pipeline, and read-only queries
//! - `sowing`, `capture`, `termination`: the stages `apply_move` runs
//!   after validation
//!
//! Only `apply_move` mutates a [`Game`](crate::core::Game).

mod capture;
pub mod engine;
mod sowing;
mod termination;

pub use capture::opposite_pit;
pub use engine::{
    apply_move, new_game, result, scores, valid_moves, validate, GameResult, InvalidMove,
    ValidMoves,
};

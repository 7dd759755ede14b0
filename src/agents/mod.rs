//! Move-choosers: anything that picks a pit for the player to move.
//!
//! Choosers only read the game. Moves they pick go through
//! [`rules::apply_move`](crate::rules::apply_move) like any other.

use crate::core::{Game, GameRng};
use crate::rules::valid_moves;

/// Policy for choosing the next pit.
pub trait MoveChooser: Send + Sync {
    /// Pick a pit for `game.turn()`.
    ///
    /// Returns `None` if no legal move exists.
    fn choose_move(&self, game: &Game, rng: &mut GameRng) -> Option<usize>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Uniform random chooser.
///
/// Selects uniformly from legal pits.
#[derive(Clone, Debug, Default)]
pub struct RandomAgent;

impl MoveChooser for RandomAgent {
    fn choose_move(&self, game: &Game, rng: &mut GameRng) -> Option<usize> {
        let moves = valid_moves(game);
        rng.choose(&moves).copied()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Always plays the lowest-numbered legal pit.
///
/// Deterministic; handy as a scripted opponent.
#[derive(Clone, Debug, Default)]
pub struct FirstMoveAgent;

impl MoveChooser for FirstMoveAgent {
    fn choose_move(&self, game: &Game, _rng: &mut GameRng) -> Option<usize> {
        valid_moves(game).first().copied()
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

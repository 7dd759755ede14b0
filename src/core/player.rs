//! Player identification and per-side board geometry.
//!
//! ## Player
//!
//! Kalah is strictly two-player. Each player owns six pits and one store;
//! every "own side" / "other side" lookup goes through `Player` so the
//! board indices live in one place.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::board::{PITS_PER_SIDE, STORE_ONE, STORE_TWO};

/// The two seats at the board.
///
/// `PlayerOne` moves first and owns pits 0-5 and store 6.
/// `PlayerTwo` owns pits 7-12 and store 13.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Both players in seating order.
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Board index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::PlayerOne => STORE_ONE,
            Player::PlayerTwo => STORE_TWO,
        }
    }

    /// Board indices of this player's six pits.
    #[must_use]
    pub const fn pits(self) -> Range<usize> {
        let first = match self {
            Player::PlayerOne => 0,
            Player::PlayerTwo => STORE_ONE + 1,
        };
        first..first + PITS_PER_SIDE
    }

    /// Whether `index` is one of this player's playing pits.
    ///
    /// Stores are never pits, so this is false for both store indices.
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pits().contains(&index)
    }

    /// Short label used by the text rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Player::PlayerOne => "P1",
            Player::PlayerTwo => "P2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

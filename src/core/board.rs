//! Fixed 14-slot board.
//!
//! Slots are indexed in sowing order:
//!
//! ```text
//!  0..=5   player one pits
//!  6       player one store
//!  7..=12  player two pits
//!  13      player two store
//! ```
//!
//! Whether a slot is a pit or a store is decided purely by its index.
//! Use [`Player::pits`] and [`Player::store`] rather than raw numbers.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::Player;

/// Number of slots on the board (12 pits + 2 stores).
pub const SLOT_COUNT: usize = 14;

/// Pits owned by each player.
pub const PITS_PER_SIDE: usize = 6;

/// Board index of player one's store.
pub const STORE_ONE: usize = 6;

/// Board index of player two's store.
pub const STORE_TWO: usize = 13;

/// Counters placed in every pit at the start of a game.
pub const INITIAL_COUNTERS: u8 = 4;

/// Counters on the board for the whole game.
pub const TOTAL_COUNTERS: u32 = INITIAL_COUNTERS as u32 * 2 * PITS_PER_SIDE as u32;

/// The board: counter counts for every pit and store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    slots: [u8; SLOT_COUNT],
}

impl Board {
    /// Create the opening position: four counters per pit, empty stores.
    #[must_use]
    pub fn new() -> Self {
        let mut slots = [INITIAL_COUNTERS; SLOT_COUNT];
        slots[STORE_ONE] = 0;
        slots[STORE_TWO] = 0;
        Self { slots }
    }

    /// Create a board from raw slot values.
    ///
    /// No invariant is checked here; positions built this way are how
    /// callers set up scenarios mid-game.
    #[must_use]
    pub const fn from_slots(slots: [u8; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    /// All fourteen slots in board order.
    #[must_use]
    pub fn slots(&self) -> &[u8; SLOT_COUNT] {
        &self.slots
    }

    /// Counters in a slot, or `None` if `index` is off the board.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied()
    }

    /// Counters in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u8 {
        self.slots[player.store()]
    }

    /// Counters in a player's six pits, in board order.
    #[must_use]
    pub fn pits(&self, player: Player) -> &[u8] {
        &self.slots[player.pits()]
    }

    /// Whether every one of a player's pits is empty.
    #[must_use]
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.pits(player).iter().all(|&n| n == 0)
    }

    /// Sum of all slots. Constant over a game.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.slots.iter().map(|&n| u32::from(n)).sum()
    }

    /// Take every counter out of a slot, leaving it empty.
    pub(crate) fn take(&mut self, index: usize) -> u8 {
        std::mem::take(&mut self.slots[index])
    }

    /// Add counters to a player's store.
    pub(crate) fn deposit(&mut self, player: Player, count: u8) {
        self.slots[player.store()] += count;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}

//! Capture on a single-counter landing in the mover's own pit.

use tracing::trace;

use crate::core::{Board, Player};

/// Index of the pit directly across the board from `pit`.
///
/// Only meaningful for pit indices (0-5, 7-12).
#[must_use]
pub fn opposite_pit(pit: usize) -> usize {
    12 - pit
}

/// Capture into the mover's store if the sow ended in one of the mover's
/// own pits that was empty before the last counter arrived.
///
/// The landing counter and everything in the opposite pit move to the
/// mover's store. Landing in a store, in an opponent pit, or across from
/// an empty pit changes nothing.
///
/// Returns the number of counters captured.
pub(crate) fn resolve_capture(board: &mut Board, landing: usize, mover: Player) -> u8 {
    if !mover.owns_pit(landing) || board[landing] != 1 {
        return 0;
    }

    let opposite = opposite_pit(landing);
    if board[opposite] == 0 {
        return 0;
    }

    let captured = board.take(landing) + board.take(opposite);
    board.deposit(mover, captured);
    trace!(%mover, landing, opposite, captured, "capture");

    captured
}

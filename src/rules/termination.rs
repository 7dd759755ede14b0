//! End-of-game detection and the final sweep.

use tracing::trace;

use crate::core::{Board, Player};

/// If either side's pits are all empty, sweep the other side's pits into
/// that side's own store.
///
/// Player one's side is checked first; at most one sweep happens.
/// Returns whether the game is over.
pub(crate) fn sweep_if_over(board: &mut Board) -> bool {
    for empty_side in Player::ALL {
        if board.side_is_empty(empty_side) {
            let holder = empty_side.opponent();
            let remaining: u8 = holder.pits().map(|pit| board.take(pit)).sum();
            board.deposit(holder, remaining);
            trace!(%empty_side, %holder, remaining, "termination sweep");
            return true;
        }
    }

    false
}

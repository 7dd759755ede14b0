//! Sowing: distribute a pit's counters around the board.

use crate::core::{Board, Player, SLOT_COUNT};

/// Empty `source` and drop its counters one by one into the following
/// slots, wrapping from 13 back to 0.
///
/// The opponent's store is skipped on every visit and does not consume a
/// counter, so a sow that laps the board still never feeds it.
///
/// Returns the landing slot: the index that received the last counter.
/// `source` must hold at least one counter.
pub(crate) fn sow(board: &mut Board, source: usize, mover: Player) -> usize {
    let skipped = mover.opponent().store();
    let mut holding = board.take(source);
    let mut cursor = source;

    while holding > 0 {
        cursor = (cursor + 1) % SLOT_COUNT;
        if cursor == skipped {
            continue;
        }
        board[cursor] += 1;
        holding -= 1;
    }

    cursor
}

//! Game state: board, turn and the finished flag.
//!
//! `Game` is plain storage with accessors. All rule logic lives in
//! [`crate::rules`], which takes the game by `&mut` for the duration of a
//! move; nothing else keeps a copy of the board between calls.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;

/// Complete state of one Kalah game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Player,
    finished: bool,
}

impl Game {
    /// Create a game in the opening position with player one to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::PlayerOne,
            finished: false,
        }
    }

    /// Create a game from an arbitrary position.
    #[must_use]
    pub fn from_parts(board: Board, turn: Player, finished: bool) -> Self {
        Self {
            board,
            turn,
            finished,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Counters in a single pit or store, `None` if off the board.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<u8> {
        self.board.get(index)
    }

    /// Player whose move is legal next. Meaningless once finished.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Whether a termination sweep has happened.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Player one's store, player two's store, and the finished flag.
    #[must_use]
    pub fn scores(&self) -> (u8, u8, bool) {
        (
            self.board.store(Player::PlayerOne),
            self.board.store(Player::PlayerTwo),
            self.finished,
        )
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    pub(crate) fn finish(&mut self) {
        self.finished = true;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

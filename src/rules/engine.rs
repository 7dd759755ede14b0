//! Move application and rule queries.
//!
//! A move runs through a fixed pipeline on one `&mut Game`:
//!
//! 1. validate the chosen pit against the player to move
//! 2. sow its counters, recording the landing slot
//! 3. resolve a capture at the landing slot
//! 4. detect the end of the game and sweep remaining counters
//! 5. pass the turn, unless the game ended or the sow landed in the
//!    mover's own store
//!
//! Each stage sees the board exactly as the previous one left it.

use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::core::{Game, Player, PITS_PER_SIDE};

use super::capture::resolve_capture;
use super::sowing::sow;
use super::termination::sweep_if_over;

/// A move that names a store, an opponent's pit, an off-board index, or an
/// empty pit.
///
/// Raising it never mutates the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("invalid move: pit {pit}")]
pub struct InvalidMove {
    /// The rejected index, as submitted.
    pub pit: usize,
}

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// One store holds more counters.
    Winner(Player),
    /// Both stores hold the same count.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Pit indices the player to move may choose, ascending.
///
/// Empty pits are excluded, so this is empty for a side with no counters
/// and for any finished game.
pub type ValidMoves = SmallVec<[usize; PITS_PER_SIDE]>;

/// Start a game: four counters in every pit, player one to move.
#[must_use]
pub fn new_game() -> Game {
    Game::new()
}

/// Check a candidate pit against the player to move.
///
/// Legal iff the pit is one of the mover's six pits and holds a counter.
/// The finished flag is not consulted; a finished game has no counters
/// left in any pit, so every pit fails the second check anyway.
pub fn validate(game: &Game, pit: usize) -> Result<(), InvalidMove> {
    if game.turn().owns_pit(pit) && game.board()[pit] > 0 {
        Ok(())
    } else {
        Err(InvalidMove { pit })
    }
}

/// Apply the move at `pit` for the player to move.
///
/// On `Err` the game is untouched. On `Ok` every stage of the move has run.
pub fn apply_move(game: &mut Game, pit: usize) -> Result<(), InvalidMove> {
    validate(game, pit)?;

    let mover = game.turn();
    let landing = sow(game.board_mut(), pit, mover);
    resolve_capture(game.board_mut(), landing, mover);

    if sweep_if_over(game.board_mut()) {
        game.finish();
        return Ok(());
    }

    advance_turn(game, mover, landing);
    Ok(())
}

/// Hand the turn to the opponent unless the last counter went into the
/// mover's own store.
fn advance_turn(game: &mut Game, mover: Player, landing: usize) {
    if landing != mover.store() {
        game.set_turn(mover.opponent());
    }
}

/// Legal pits for the player to move.
#[must_use]
pub fn valid_moves(game: &Game) -> ValidMoves {
    game.turn()
        .pits()
        .filter(|&pit| game.board()[pit] > 0)
        .collect()
}

/// Player one's store, player two's store, and whether the game is over.
#[must_use]
pub fn scores(game: &Game) -> (u8, u8, bool) {
    game.scores()
}

/// The winner of a finished game, `None` while play continues.
#[must_use]
pub fn result(game: &Game) -> Option<GameResult> {
    let (one, two, finished) = game.scores();
    if !finished {
        return None;
    }

    Some(match one.cmp(&two) {
        Ordering::Greater => GameResult::Winner(Player::PlayerOne),
        Ordering::Less => GameResult::Winner(Player::PlayerTwo),
        Ordering::Equal => GameResult::Draw,
    })
}

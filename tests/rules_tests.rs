//! Move application scenarios for both seats.

use kalah::{
    apply_move, new_game, result, scores, valid_moves, Board, Game, GameResult, InvalidMove, Player,
};

fn position(slots: [u8; 14], turn: Player) -> Game {
    Game::from_parts(Board::from_slots(slots), turn, false)
}

/// Apply `pit` and check the resulting board, turn and finished flag.
fn assert_move(
    start: [u8; 14],
    turn: Player,
    pit: usize,
    expected: [u8; 14],
    expected_turn: Player,
    expected_finished: bool,
) {
    let mut game = position(start, turn);
    apply_move(&mut game, pit).unwrap();

    assert_eq!(game.board().slots(), &expected, "board after pit {pit}");
    assert_eq!(game.turn(), expected_turn, "turn after pit {pit}");
    assert_eq!(game.is_finished(), expected_finished, "finished after pit {pit}");
}

// =============================================================================
// Sowing and turn passing
// =============================================================================

#[test]
fn test_new_game() {
    let game = new_game();
    assert_eq!(game.board().slots(), &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]);
    assert_eq!(game.turn(), Player::PlayerOne);
    assert!(!game.is_finished());
}

#[test]
fn test_basic_sow_flips_turn() {
    assert_move(
        [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        Player::PlayerOne,
        0,
        [0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        Player::PlayerTwo,
        false,
    );
    assert_move(
        [0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        Player::PlayerTwo,
        7,
        [0, 5, 5, 5, 5, 4, 0, 0, 5, 5, 5, 5, 4, 0],
        Player::PlayerOne,
        false,
    );
}

#[test]
fn test_extra_turn() {
    assert_move(
        [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        Player::PlayerOne,
        2,
        [4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0],
        Player::PlayerOne,
        false,
    );
    assert_move(
        [0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        Player::PlayerTwo,
        9,
        [0, 5, 5, 5, 5, 4, 0, 4, 4, 0, 5, 5, 5, 1],
        Player::PlayerTwo,
        false,
    );
}

#[test]
fn test_around_the_bend() {
    assert_move(
        [4, 4, 4, 4, 4, 8, 0, 4, 4, 4, 4, 4, 4, 0],
        Player::PlayerOne,
        5,
        [5, 4, 4, 4, 4, 0, 1, 5, 5, 5, 5, 5, 5, 0],
        Player::PlayerTwo,
        false,
    );
    assert_move(
        [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 8, 0],
        Player::PlayerTwo,
        12,
        [5, 5, 5, 5, 5, 5, 0, 5, 4, 4, 4, 4, 0, 1],
        Player::PlayerOne,
        false,
    );
}

#[test]
fn test_lap_never_feeds_opponent_store() {
    let mut slots = [0u8; 14];
    slots[5] = 40;
    slots[9] = 8;
    let mut game = position(slots, Player::PlayerOne);

    apply_move(&mut game, 5).unwrap();

    assert_eq!(game.board()[Player::PlayerTwo.store()], 0);
    assert_eq!(game.board().total(), 48);
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn test_capture() {
    assert_move(
        [4, 4, 4, 4, 0, 4, 0, 4, 4, 4, 4, 4, 4, 0],
        Player::PlayerOne,
        0,
        [0, 5, 5, 5, 0, 4, 5, 4, 0, 4, 4, 4, 4, 0],
        Player::PlayerTwo,
        false,
    );
    assert_move(
        [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 0, 4, 0],
        Player::PlayerTwo,
        7,
        [4, 0, 4, 4, 4, 4, 0, 0, 5, 5, 5, 0, 4, 5],
        Player::PlayerOne,
        false,
    );
}

#[test]
fn test_landing_in_empty_opponent_pit_never_captures() {
    assert_move(
        [4, 4, 4, 4, 4, 3, 0, 0, 0, 4, 4, 4, 4, 0],
        Player::PlayerOne,
        5,
        [4, 4, 4, 4, 4, 0, 1, 1, 1, 4, 4, 4, 4, 0],
        Player::PlayerTwo,
        false,
    );
    assert_move(
        [0, 0, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 3, 0],
        Player::PlayerTwo,
        12,
        [1, 1, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 0, 1],
        Player::PlayerOne,
        false,
    );
}

#[test]
fn test_no_capture_across_empty_pit() {
    // Pit 3 lands in empty pit 4; pit 8 across is empty too.
    assert_move(
        [4, 4, 4, 1, 0, 4, 0, 4, 0, 4, 4, 4, 4, 0],
        Player::PlayerOne,
        3,
        [4, 4, 4, 0, 1, 4, 0, 4, 0, 4, 4, 4, 4, 0],
        Player::PlayerTwo,
        false,
    );
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn test_termination_sweep() {
    assert_move(
        [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 5, 0, 0, 0],
        Player::PlayerOne,
        5,
        [0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 5],
        Player::PlayerOne,
        true,
    );
    assert_move(
        [0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
        Player::PlayerTwo,
        12,
        [0, 0, 0, 0, 0, 0, 5, 0, 0, 0, 0, 0, 0, 1],
        Player::PlayerTwo,
        true,
    );
}

#[test]
fn test_termination_with_nothing_to_sweep() {
    assert_move(
        [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        Player::PlayerOne,
        5,
        [0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
        Player::PlayerOne,
        true,
    );
}

#[test]
fn test_capture_emptied_side_triggers_sweep() {
    // Player one's last counter lands in empty pit 1 and captures pit 11,
    // leaving player one's side empty.
    let mut game = position([1, 0, 0, 0, 0, 0, 10, 2, 3, 0, 0, 4, 0, 28], Player::PlayerOne);
    apply_move(&mut game, 0).unwrap();

    assert!(game.is_finished());
    assert_eq!(game.turn(), Player::PlayerOne);
    assert_eq!(game.board().slots(), &[0, 0, 0, 0, 0, 0, 15, 0, 0, 0, 0, 0, 0, 33]);
    assert_eq!(result(&game), Some(GameResult::Winner(Player::PlayerTwo)));
    assert!(valid_moves(&game).is_empty());
}

#[test]
fn test_finishing_move_into_opponent_pit_keeps_turn() {
    // Player one's last counter crosses into pit 7, emptying player one's side.
    assert_move(
        [0, 0, 0, 0, 0, 2, 10, 1, 0, 0, 0, 0, 0, 35],
        Player::PlayerOne,
        5,
        [0, 0, 0, 0, 0, 0, 11, 0, 0, 0, 0, 0, 0, 37],
        Player::PlayerOne,
        true,
    );
    // Player two's last counter wraps into pit 0, emptying player two's side.
    assert_move(
        [0, 0, 0, 0, 3, 0, 20, 0, 0, 0, 0, 0, 2, 23],
        Player::PlayerTwo,
        12,
        [0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24],
        Player::PlayerTwo,
        true,
    );
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_invalid_moves_leave_game_unchanged() {
    let cases = [
        ([1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0], Player::PlayerOne, 1),
        ([1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0], Player::PlayerOne, 8),
        ([1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0], Player::PlayerTwo, 0),
        ([4, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4, 2], Player::PlayerOne, 6),
        ([4, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4, 2], Player::PlayerTwo, 13),
        ([4, 4, 4, 4, 4, 4, 3, 4, 4, 4, 4, 4, 4, 2], Player::PlayerTwo, 14),
    ];

    for (slots, turn, pit) in cases {
        let mut game = position(slots, turn);
        let before = game.clone();

        assert_eq!(apply_move(&mut game, pit), Err(InvalidMove { pit }));
        assert_eq!(game, before);
    }
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_valid_moves() {
    assert_eq!(valid_moves(&new_game()).as_slice(), &[0, 1, 2, 3, 4, 5]);

    let game = position([0, 5, 5, 5, 5, 4, 0, 4, 4, 0, 5, 5, 5, 1], Player::PlayerTwo);
    assert_eq!(valid_moves(&game).as_slice(), &[7, 8, 10, 11, 12]);
}

#[test]
fn test_scores() {
    let game = new_game();
    assert_eq!(scores(&game), (0, 0, false));

    let finished = Game::from_parts(
        Board::from_slots([0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 24]),
        Player::PlayerOne,
        true,
    );
    assert_eq!(scores(&finished), (24, 24, true));
    assert_eq!(scores(&finished), scores(&finished));
    assert_eq!(result(&finished), Some(GameResult::Draw));
}

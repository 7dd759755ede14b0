//! Drives complete games between two move-choosers.

use tracing::{debug, info, warn};

use crate::agents::MoveChooser;
use crate::core::{Game, GameRng, Player};
use crate::rules::{apply_move, new_game, result, GameResult, InvalidMove};

use super::config::MatchConfig;

/// Errors that can end a match early.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("chooser picked an illegal pit: {0}")]
    Illegal(#[from] InvalidMove),

    #[error("{chooser} chooser found no move for {player} in a running game")]
    NoMove {
        chooser: &'static str,
        player: Player,
    },

    #[error("match exceeded {limit} moves")]
    MoveLimitReached { limit: u32 },
}

/// Outcome of one match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    /// Final position.
    pub game: Game,
    /// Who won.
    pub result: GameResult,
    /// Moves applied, extra turns included.
    pub moves: u32,
}

impl MatchSummary {
    /// Final store counts for player one and player two.
    #[must_use]
    pub fn stores(&self) -> (u8, u8) {
        let (one, two, _) = self.game.scores();
        (one, two)
    }
}

/// Tally over a series of matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeriesSummary {
    pub player_one_wins: u32,
    pub player_two_wins: u32,
    pub draws: u32,
}

impl SeriesSummary {
    /// Count one result.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(Player::PlayerOne) => self.player_one_wins += 1,
            GameResult::Winner(Player::PlayerTwo) => self.player_two_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Matches counted so far.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.draws
    }
}

/// Play one game from the opening position to the end.
///
/// Each seat draws from its own stream derived from `rng`, so the same
/// `rng` always replays the same match. `observer` sees the game after
/// every move when `config.render` is set.
pub fn run_match<F>(
    config: &MatchConfig,
    player_one: &dyn MoveChooser,
    player_two: &dyn MoveChooser,
    rng: &GameRng,
    mut observer: F,
) -> Result<MatchSummary, SessionError>
where
    F: FnMut(&Game),
{
    let mut rng_one = rng.for_context("player-one");
    let mut rng_two = rng.for_context("player-two");
    let mut game = new_game();
    let mut moves = 0u32;

    let outcome = loop {
        if let Some(outcome) = result(&game) {
            break outcome;
        }

        if config.max_moves > 0 && moves >= config.max_moves {
            return Err(SessionError::MoveLimitReached {
                limit: config.max_moves,
            });
        }

        let mover = game.turn();
        let (chooser, seat_rng) = match mover {
            Player::PlayerOne => (player_one, &mut rng_one),
            Player::PlayerTwo => (player_two, &mut rng_two),
        };

        let pit = chooser
            .choose_move(&game, seat_rng)
            .ok_or(SessionError::NoMove {
                chooser: chooser.name(),
                player: mover,
            })?;

        if let Err(err) = apply_move(&mut game, pit) {
            warn!(chooser = chooser.name(), %mover, pit, "chooser picked an illegal pit");
            return Err(err.into());
        }
        moves += 1;

        debug!(
            %mover,
            pit,
            next = %game.turn(),
            finished = game.is_finished(),
            "applied move"
        );

        if config.render {
            observer(&game);
        }
    };

    let (one, two, _) = game.scores();
    info!(moves, player_one = one, player_two = two, ?outcome, "match finished");

    Ok(MatchSummary {
        game,
        result: outcome,
        moves,
    })
}

/// Play `config.games` matches, forking a fresh RNG from `config.seed` for
/// each one.
pub fn run_series<F>(
    config: &MatchConfig,
    player_one: &dyn MoveChooser,
    player_two: &dyn MoveChooser,
    mut observer: F,
) -> Result<SeriesSummary, SessionError>
where
    F: FnMut(u32, &Game),
{
    let mut root = GameRng::new(config.seed);
    let mut summary = SeriesSummary::default();

    for index in 0..config.games {
        let game_rng = root.fork();
        let played = run_match(config, player_one, player_two, &game_rng, |game| {
            observer(index, game)
        })?;
        summary.record(played.result);
    }

    info!(
        games = summary.games(),
        player_one_wins = summary.player_one_wins,
        player_two_wins = summary.player_two_wins,
        draws = summary.draws,
        "series finished"
    );

    Ok(summary)
}

//! Kalah self-play driver.
//!
//! Plays random-vs-random games and prints the board after every move.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kalah::{run_series, MatchConfig, RandomAgent};

/// Play Kalah between two random agents
#[derive(Parser, Debug)]
#[command(name = "kalah")]
#[command(about = "Kalah self-play with uniform-random agents", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the agents' random choices
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Abort a game after this many moves (0 = unlimited)
    #[arg(long, default_value_t = 1000)]
    max_moves: u32,

    /// Do not print the board after each move
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> MatchConfig {
        MatchConfig::default()
            .with_seed(self.seed)
            .with_games(self.games)
            .with_max_moves(self.max_moves)
            .with_render(!self.quiet)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    info!(?config, "starting self-play");

    let summary = run_series(&config, &RandomAgent, &RandomAgent, |_, game| {
        println!("{game}");
    })?;

    println!(
        "P1 wins: {}  P2 wins: {}  draws: {}",
        summary.player_one_wins, summary.player_two_wins, summary.draws
    );

    Ok(())
}

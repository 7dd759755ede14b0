//! Match driver: plays whole games between two move-choosers.
//!
//! - `MatchConfig`: seed, move limit, series length, rendering
//! - `run_match`: one game from the opening position
//! - `run_series`: several games with independent RNG forks

pub mod config;
pub mod runner;

pub use config::MatchConfig;
pub use runner::{run_match, run_series, MatchSummary, SeriesSummary, SessionError};

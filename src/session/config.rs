//! Match configuration parameters.

use serde::{Deserialize, Serialize};

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Random seed for the choosers.
    /// Same seed produces identical matches.
    pub seed: u64,

    /// Maximum moves per match (0 = unlimited).
    /// A match that reaches the limit is reported as an error.
    pub max_moves: u32,

    /// Number of matches in a series.
    pub games: u32,

    /// Call the render hook after every move.
    pub render: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_moves: 1000,
            games: 1,
            render: false,
        }
    }
}

impl MatchConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom move limit.
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// Create a new config with custom series length.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Create a new config with rendering on or off.
    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }
}

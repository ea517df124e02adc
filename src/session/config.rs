//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Side};
use crate::search::SearchConfig;

/// Who opens each game of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    Player,
    Ai,
    /// Coin flip per game, drawn from the session RNG.
    #[default]
    Random,
}

impl FirstPlayer {
    /// Settle the opening side for one game.
    pub fn resolve(self, rng: &mut GameRng) -> Side {
        match self {
            FirstPlayer::Player => Side::Player,
            FirstPlayer::Ai => Side::Ai,
            FirstPlayer::Random => rng.gen_side(),
        }
    }
}

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Opening side for every game (default: random).
    pub first_player: FirstPlayer,

    /// Seed for the session RNG.
    /// Same seed produces the same sequence of opening sides.
    pub seed: u64,

    /// Engine settings.
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Random,
            seed: 42,
            search: SearchConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_first_player(mut self, first: FirstPlayer) -> Self {
        self.first_player = first;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

//! Batch play of the engine against an `Opponent`.

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::core::GameRng;
use crate::error::SimulationError;
use crate::rules::Outcome;
use crate::search::SearchConfig;
use crate::session::{FirstPlayer, MetricsSnapshot, Session, SessionConfig};

use super::opponent::Opponent;

/// Largest batch a single run accepts.
pub const MAX_GAMES: usize = 999;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play (at most `MAX_GAMES`).
    pub games: usize,

    /// Who opens each game (default: coin flip per game).
    pub first_player: FirstPlayer,

    /// Seed for opening sides and opponent randomness.
    pub seed: u64,

    /// Engine settings.
    pub search: SearchConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            first_player: FirstPlayer::Random,
            seed: 42,
            search: SearchConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

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

    fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_first_player(self.first_player)
            .with_seed(self.seed)
            .with_search(self.search.clone())
    }
}

/// Result of a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Games played, in order.
    pub outcomes: Vec<Outcome>,

    /// Session metrics after the last game.
    pub metrics: MetricsSnapshot,
}

impl SimulationReport {
    /// True if the opponent never won a game.
    #[must_use]
    pub fn ai_undefeated(&self) -> bool {
        self.metrics.wins_player == 0
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.metrics)
    }
}

/// Runs repeated games between the engine and an opponent.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Play `config.games` games, recording each result in one session.
    pub fn run<O: Opponent>(&self, opponent: &mut O) -> Result<SimulationReport, SimulationError> {
        if self.config.games > MAX_GAMES {
            return Err(SimulationError::TooManyGames {
                requested: self.config.games,
                max: MAX_GAMES,
            });
        }

        info!(games = self.config.games, seed = self.config.seed, "simulation started");

        let mut session = Session::new(self.config.session_config());
        let mut rng = GameRng::new(self.config.seed).fork();
        let mut outcomes = Vec::with_capacity(self.config.games);

        for game in 0..self.config.games {
            if game > 0 {
                session.reset();
            }
            opponent.new_game();
            let outcome = play_game(&mut session, opponent, &mut rng);
            session.record_game_result(outcome);
            trace!(game, %outcome, "game finished");
            outcomes.push(outcome);
        }

        let metrics = session.metrics_snapshot();
        info!(
            player_wins = metrics.wins_player,
            ai_wins = metrics.wins_ai,
            draws = metrics.draws,
            "simulation finished"
        );

        Ok(SimulationReport { outcomes, metrics })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// Play the session's current game to the end.
///
/// The Player side is driven by `opponent`; if it proposes an illegal
/// move the first legal move is played instead. Does not record the
/// result.
pub fn play_game<O: Opponent + ?Sized>(session: &mut Session, opponent: &mut O, rng: &mut GameRng) -> Outcome {
    loop {
        let outcome = session.evaluate_outcome();
        if outcome.is_terminal() {
            return outcome;
        }

        if session.ai_take_turn() {
            continue;
        }

        let legal = session.board().legal_moves();
        let pos = opponent
            .choose_move(session.board(), rng)
            .filter(|pos| legal.contains(pos))
            .or_else(|| legal.first().copied());

        match pos {
            Some(pos) if session.apply_player_move(pos.row as usize, pos.col as usize) => {}
            // Ongoing always has a legal move; this only guards the loop
            _ => return session.evaluate_outcome(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{RandomOpponent, ScriptedOpponent};

    #[test]
    fn test_rejects_too_many_games() {
        let sim = Simulation::new(SimulationConfig::new().with_games(1000));
        assert_eq!(
            sim.run(&mut RandomOpponent),
            Err(SimulationError::TooManyGames {
                requested: 1000,
                max: 999
            })
        );
    }

    #[test]
    fn test_zero_games() {
        let sim = Simulation::new(SimulationConfig::new().with_games(0));
        let report = sim.run(&mut RandomOpponent).unwrap();
        assert!(report.outcomes.is_empty());
        assert_eq!(report.metrics.games_played, 0);
    }

    #[test]
    fn test_counts_add_up() {
        let sim = Simulation::new(SimulationConfig::new().with_games(12).with_seed(5));
        let report = sim.run(&mut RandomOpponent).unwrap();

        let m = &report.metrics;
        assert_eq!(m.games_played, 12);
        assert_eq!(m.wins_player + m.wins_ai + m.draws, 12);
        assert!(report.ai_undefeated());
        assert!(report.outcomes.iter().all(|o| o.is_terminal()));
    }

    #[test]
    fn test_play_game_with_script() {
        let mut session = Session::new(SessionConfig::default().with_first_player(FirstPlayer::Player));
        let mut rng = GameRng::new(0);
        // Corner opening answered by the engine; the script then plays into a loss
        let mut opponent = ScriptedOpponent::new([
            crate::core::Position::new(0, 0),
            crate::core::Position::new(0, 1),
            crate::core::Position::new(2, 0),
            crate::core::Position::new(2, 1),
        ]);

        let outcome = play_game(&mut session, &mut opponent, &mut rng);

        assert!(outcome.is_terminal());
        assert_ne!(outcome, Outcome::PlayerWin);
    }
}

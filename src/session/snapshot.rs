//! Session-level counters and the read-only metrics view.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rules::Outcome;
use crate::search::SearchMetrics;

/// Results of completed games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTally {
    pub wins_player: u32,
    pub wins_ai: u32,
    pub draws: u32,
    pub games_played: u32,
}

impl GameTally {
    /// Count one finished game.
    ///
    /// `Ongoing` still counts as a game played but credits nobody.
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        match outcome {
            Outcome::PlayerWin => self.wins_player += 1,
            Outcome::AiWin => self.wins_ai += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }
}

/// Point-in-time copy of a session's search metrics and tallies.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub nodes_explored_last_decision: u64,
    pub max_depth_ever: u8,
    pub decision_latencies: Vec<Duration>,
    pub wins_player: u32,
    pub wins_ai: u32,
    pub draws: u32,
    pub games_played: u32,
}

impl MetricsSnapshot {
    pub(crate) fn capture(metrics: &SearchMetrics, tally: &GameTally) -> Self {
        Self {
            nodes_explored_last_decision: metrics.nodes_explored,
            max_depth_ever: metrics.max_depth,
            decision_latencies: metrics.decision_latencies.clone(),
            wins_player: tally.wins_player,
            wins_ai: tally.wins_ai,
            draws: tally.draws,
            games_played: tally.games_played,
        }
    }

    /// Mean decision latency, zero before the first decision.
    #[must_use]
    pub fn average_latency(&self) -> Duration {
        match self.decision_latencies.len() {
            0 => Duration::ZERO,
            n => {
                let total: Duration = self.decision_latencies.iter().sum();
                total / u32::try_from(n).unwrap_or(u32::MAX)
            }
        }
    }

    /// Last decision's node count over the number of decisions, as reported
    /// in the statistics summary.
    #[must_use]
    pub fn average_nodes_per_decision(&self) -> f64 {
        self.nodes_explored_last_decision as f64 / self.decision_latencies.len().max(1) as f64
    }
}

impl std::fmt::Display for MetricsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "===== STATISTICS =====")?;
        writeln!(f, "Games played: {}", self.games_played)?;
        writeln!(f, "Player wins: {}", self.wins_player)?;
        writeln!(f, "Ai wins: {}", self.wins_ai)?;
        writeln!(f, "Draws: {}", self.draws)?;
        if !self.decision_latencies.is_empty() {
            writeln!(
                f,
                "Average decision time: {:.4} seconds",
                self.average_latency().as_secs_f64()
            )?;
        }
        writeln!(f, "Max depth reached: {}", self.max_depth_ever)?;
        writeln!(
            f,
            "Average nodes explored per move: {:.2}",
            self.average_nodes_per_decision()
        )?;
        write!(f, "======================")
    }
}

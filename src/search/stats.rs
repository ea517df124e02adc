//! Search metrics for diagnostics.
//!
//! The counters deliberately have different lifetimes: `nodes_explored`
//! covers only the most recent decision, `max_depth` and the latency log
//! accumulate for as long as the owner lives.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Metrics collected by the minimax search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Nodes visited during the last top-level decision.
    pub nodes_explored: u64,

    /// Deepest recursion depth ever visited. Never reset.
    pub max_depth: u8,

    /// Wall-clock time of every top-level decision, oldest first.
    pub decision_latencies: Vec<Duration>,
}

impl SearchMetrics {
    /// Create new empty metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new top-level decision. Only the node counter is reset.
    pub(crate) fn begin_decision(&mut self) {
        self.nodes_explored = 0;
    }

    /// Count a visited node at `depth`.
    #[inline]
    pub(crate) fn record_node(&mut self, depth: u8) {
        self.nodes_explored += 1;
        if depth > self.max_depth {
            self.max_depth = depth;
        }
    }

    pub(crate) fn record_latency(&mut self, elapsed: Duration) {
        self.decision_latencies.push(elapsed);
    }

    /// Number of top-level decisions made so far.
    #[must_use]
    pub fn total_decisions(&self) -> usize {
        self.decision_latencies.len()
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

    /// Nodes of the last decision spread over all decisions made.
    ///
    /// This is the figure the statistics summary reports; it is not a true
    /// per-decision mean because `nodes_explored` only holds the last one.
    #[must_use]
    pub fn average_nodes_per_decision(&self) -> f64 {
        self.nodes_explored as f64 / self.decision_latencies.len().max(1) as f64
    }
}

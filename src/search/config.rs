//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Deepest ply the search will recurse to. A 3x3 game never lasts longer.
pub const DEFAULT_DEPTH_CEILING: u8 = 9;

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Cut off subtrees once `beta <= alpha` (default: true).
    /// Disabling it yields plain minimax: same values, more nodes.
    pub alpha_beta: bool,

    /// Recursion ceiling. A node at this depth scores 0 unless the board
    /// is already decided.
    pub depth_ceiling: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            alpha_beta: true,
            depth_ceiling: DEFAULT_DEPTH_CEILING,
        }
    }
}

impl SearchConfig {
    /// Plain minimax, no pruning.
    pub fn exhaustive() -> Self {
        Self::default().with_alpha_beta(false)
    }

    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    pub fn with_depth_ceiling(mut self, depth: u8) -> Self {
        self.depth_ceiling = depth;
        self
    }
}

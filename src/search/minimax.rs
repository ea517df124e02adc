//! Minimax with alpha-beta pruning.
//!
//! The Ai is always the maximizing side. Scores are exact terminal values
//! adjusted by depth:
//!
//! - Ai win: `10 - depth` (faster wins score higher)
//! - Player win: `depth - 10` (slower losses score higher)
//! - Draw: `0`
//!
//! Depth never exceeds 9, so any win outranks a draw and any draw outranks
//! a loss regardless of depth.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Position, Side};
use crate::rules::{evaluate, Outcome};

use super::config::SearchConfig;
use super::stats::SearchMetrics;

/// Base value of a decided game before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Lower search bound, strictly below every reachable score.
pub const NEG_INF: i32 = -100;

/// Upper search bound, strictly above every reachable score.
pub const POS_INF: i32 = 100;

/// Outcome of one top-level decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The chosen move: the first root move with the greatest score.
    pub best_move: Position,

    /// Backed-up score of `best_move`.
    pub score: i32,

    /// Score of every root move, in the order they were searched.
    pub root_scores: Vec<(Position, i32)>,
}

/// Minimax search context.
///
/// Owns the configuration and the metrics; borrows the board mutably for
/// the duration of a call and hands it back unchanged.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    config: SearchConfig,
    metrics: SearchMetrics,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            metrics: SearchMetrics::default(),
        }
    }

    /// Score the board from the Ai's point of view.
    ///
    /// `maximizing` selects whose ply it is (true = Ai). Every cell written
    /// during the recursion is cleared again before this returns.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.metrics.record_node(depth);

        match evaluate(board) {
            Outcome::AiWin => return WIN_SCORE - depth as i32,
            Outcome::PlayerWin => return depth as i32 - WIN_SCORE,
            Outcome::Draw => return 0,
            Outcome::Ongoing => {}
        }

        if depth >= self.config.depth_ceiling {
            return 0;
        }

        if maximizing {
            let mut best = NEG_INF;
            for pos in board.legal_moves() {
                board.place(pos, Side::Ai);
                let value = self.search(board, depth + 1, false, alpha, beta);
                board.clear(pos);

                best = best.max(value);
                alpha = alpha.max(best);
                if self.config.alpha_beta && beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = POS_INF;
            for pos in board.legal_moves() {
                board.place(pos, Side::Player);
                let value = self.search(board, depth + 1, true, alpha, beta);
                board.clear(pos);

                best = best.min(value);
                beta = beta.min(best);
                if self.config.alpha_beta && beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Pick the Ai's move on `board`.
    ///
    /// Returns `None` only when the board has no empty cell; checking for a
    /// finished game first is the caller's job.
    pub fn choose_best_move(&mut self, board: &mut Board) -> Option<Position> {
        self.analyze(board).map(|result| result.best_move)
    }

    /// Like [`MinimaxSearch::choose_best_move`], but also report the score
    /// of every root move.
    ///
    /// Each root move is searched with a fresh `(NEG_INF, POS_INF)` window
    /// as the opponent's ply at depth 0. Only a strictly greater score
    /// replaces the current best, so ties go to the earliest move in
    /// row-major order.
    pub fn analyze(&mut self, board: &mut Board) -> Option<SearchResult> {
        self.metrics.begin_decision();
        let start = Instant::now();

        let moves = board.legal_moves();
        let mut best: Option<(Position, i32)> = None;
        let mut root_scores = Vec::with_capacity(moves.len());

        for pos in moves {
            board.place(pos, Side::Ai);
            let score = self.search(board, 0, false, NEG_INF, POS_INF);
            board.clear(pos);

            root_scores.push((pos, score));
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let elapsed = start.elapsed();
        self.metrics.record_latency(elapsed);

        debug!(
            best = ?best,
            nodes = self.metrics.nodes_explored,
            max_depth = self.metrics.max_depth,
            elapsed_us = elapsed.as_micros() as u64,
            "decision complete"
        );

        best.map(|(best_move, score)| SearchResult {
            best_move,
            score,
            root_scores,
        })
    }

    /// Get search metrics.
    #[must_use]
    pub fn metrics(&self) -> &SearchMetrics {
        &self.metrics
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

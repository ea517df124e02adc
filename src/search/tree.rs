//! Enumeration of the reachable game tree.
//!
//! Walks every legal alternating game from the empty board, stopping at
//! decided positions. Positions are deduplicated, so transpositions are
//! counted once.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Side};
use crate::rules::{evaluate, Outcome};

/// Aggregate counts over the reachable positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Distinct reachable positions, the empty board included.
    pub positions: usize,
    /// Positions where the game is over.
    pub terminal: usize,
    pub player_wins: usize,
    pub ai_wins: usize,
    pub draws: usize,
}

/// Every distinct board reachable by legal play with `first` moving first.
///
/// Order is depth-first discovery order, starting with the empty board.
#[must_use]
pub fn reachable_positions(first: Side) -> Vec<Board> {
    let mut seen = FxHashSet::default();
    let mut order = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        order.push(board);

        if evaluate(&board).is_terminal() {
            continue;
        }

        let to_move = side_to_move(&board, first);
        for pos in board.legal_moves().into_iter().rev() {
            let mut child = board;
            child.place(pos, to_move);
            if !seen.contains(&child) {
                stack.push(child);
            }
        }
    }

    order
}

/// Whose move it is on a board reached by alternating play from `first`.
#[must_use]
pub fn side_to_move(board: &Board, first: Side) -> Side {
    if board.count(first) > board.count(first.opponent()) {
        first.opponent()
    } else {
        first
    }
}

/// Count reachable positions and classify the terminal ones.
#[must_use]
pub fn tree_stats(first: Side) -> TreeStats {
    reachable_positions(first)
        .iter()
        .fold(TreeStats::default(), |mut stats, board| {
            stats.positions += 1;
            match evaluate(board) {
                Outcome::Ongoing => {}
                Outcome::PlayerWin => {
                    stats.terminal += 1;
                    stats.player_wins += 1;
                }
                Outcome::AiWin => {
                    stats.terminal += 1;
                    stats.ai_wins += 1;
                }
                Outcome::Draw => {
                    stats.terminal += 1;
                    stats.draws += 1;
                }
            }
            stats
        })
}

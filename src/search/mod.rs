//! Game-tree search for the Ai side.
//!
//! ## Overview
//!
//! - **Minimax**: exhaustive two-player zero-sum search, Ai maximizing
//! - **Alpha-beta pruning**: skips subtrees that cannot change the result
//! - **In-place backtracking**: one board, mutated and restored per ply
//! - **Metrics**: nodes explored, deepest ply, per-decision latency
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, Position};
//! use rust_ttt::search::{MinimaxSearch, SearchConfig};
//!
//! let mut board = Board::from_rows([[1, 1, 0], [2, 2, 0], [0, 0, 0]]).unwrap();
//! let mut search = MinimaxSearch::new(SearchConfig::default());
//!
//! assert_eq!(search.choose_best_move(&mut board), Some(Position::new(1, 2)));
//! println!("explored {} nodes", search.metrics().nodes_explored);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::SearchConfig;
pub use minimax::{MinimaxSearch, SearchResult, NEG_INF, POS_INF, WIN_SCORE};
pub use stats::SearchMetrics;
pub use tree::{reachable_positions, side_to_move, tree_stats, TreeStats};

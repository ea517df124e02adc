//! # rust-ttt
//!
//! A 3x3 tic-tac-toe engine whose computer side plays by exhaustive
//! minimax search with alpha-beta pruning.
//!
//! ## Design Principles
//!
//! 1. **One Board, Mutated In Place**: The search applies and reverts moves
//!    on a single borrowed board. No node leaks a mutation to its sibling.
//!
//! 2. **Derived Outcomes**: Win/draw/ongoing is recomputed from the board
//!    every time it is asked for; nothing is cached.
//!
//! 3. **Exact Scores**: Terminal positions only, adjusted by depth so that
//!    faster wins and slower losses are preferred. Integer bounds, no
//!    floating point.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, positions, the board, RNG
//! - `rules`: Terminal-state evaluation
//! - `search`: Minimax engine, configuration, metrics, tree enumeration
//! - `session`: The public game-session surface
//! - `sim`: Batch play against scripted, random, or perfect opponents
//! - `error`: Rejected-move and simulation errors

pub mod core;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, Position, Side};

pub use crate::error::{MoveError, SimulationError};

pub use crate::rules::{evaluate, winning_line, Outcome};

pub use crate::search::{
    reachable_positions, tree_stats, MinimaxSearch, SearchConfig, SearchMetrics, SearchResult,
    TreeStats,
};

pub use crate::session::{FirstPlayer, GameTally, MetricsSnapshot, Session, SessionConfig};

pub use crate::sim::{
    Opponent, PerfectOpponent, RandomOpponent, ScriptedOpponent, Simulation, SimulationConfig,
    SimulationReport,
};

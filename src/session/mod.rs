//! Game sessions.
//!
//! A `Session` owns the live board and the turn indicator and is what a
//! driver (interactive loop, simulation, server) talks to:
//!
//! ```rust
//! use rust_ttt::rules::Outcome;
//! use rust_ttt::session::{FirstPlayer, Session, SessionConfig};
//!
//! let mut session = Session::new(SessionConfig::default().with_first_player(FirstPlayer::Player));
//!
//! assert!(session.apply_player_move(1, 1));
//! assert!(session.ai_take_turn());
//! assert_eq!(session.evaluate_outcome(), Outcome::Ongoing);
//!
//! let snapshot = session.metrics_snapshot();
//! assert_eq!(snapshot.decision_latencies.len(), 1);
//! ```

pub mod config;
pub mod game;
pub mod snapshot;

pub use config::{FirstPlayer, SessionConfig};
pub use game::Session;
pub use snapshot::{GameTally, MetricsSnapshot};

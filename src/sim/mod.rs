//! Simulation drivers.
//!
//! Plays the engine against scripted, random, or perfect opponents and
//! collects the session metrics:
//!
//! ```rust
//! use rust_ttt::sim::{RandomOpponent, Simulation, SimulationConfig};
//!
//! let sim = Simulation::new(SimulationConfig::new().with_games(5).with_seed(1));
//! let report = sim.run(&mut RandomOpponent).unwrap();
//!
//! assert_eq!(report.metrics.games_played, 5);
//! assert!(report.ai_undefeated());
//! println!("{}", report);
//! ```

pub mod opponent;
pub mod runner;

pub use opponent::{Opponent, PerfectOpponent, RandomOpponent, ScriptedOpponent};
pub use runner::{play_game, Simulation, SimulationConfig, SimulationReport, MAX_GAMES};

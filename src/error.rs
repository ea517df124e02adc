//! Error types.
//!
//! Rejected moves are ordinary outcomes, not faults: the boolean entry
//! points (`Board::apply_move`, `Session::apply_player_move`) collapse any
//! `MoveError` into `false`. The typed variants exist for callers that want
//! to report why a move was refused.

use thiserror::Error;

use crate::core::Side;

/// Why a move was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    OutOfRange { row: usize, col: usize },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("it is {expected}'s turn")]
    NotYourTurn { expected: Side },

    #[error("invalid cell code {value} (expected 0, 1 or 2)")]
    InvalidCell { value: u8 },
}

/// Errors from the simulation driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    #[error("requested {requested} games, at most {max} may be simulated")]
    TooManyGames { requested: usize, max: usize },
}

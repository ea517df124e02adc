//! Core types: sides, cells, the board, and RNG.
//!
//! Nothing here knows about winning or searching; see `rules` and
//! `search` for that.

pub mod board;
pub mod rng;
pub mod side;

pub use board::{Board, MoveList, Position, CELLS, SIZE};
pub use rng::GameRng;
pub use side::{Cell, Side};

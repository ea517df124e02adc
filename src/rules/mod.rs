//! Terminal-state rules.
//!
//! A pure function of the board: which line (if any) is complete, and
//! whether the board is full. Safe to call at any recursion depth.

pub mod outcome;

pub use outcome::{evaluate, winning_line, Outcome, LINES};

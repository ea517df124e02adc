//! Terminal-state evaluation.
//!
//! The outcome is always derived from the board on demand and never
//! cached: the search mutates and reverts the board far too often for a
//! stored outcome to stay correct.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Position, Side};

/// State of a game as read off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell.
    Ongoing,
    PlayerWin,
    AiWin,
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// The win outcome for a side.
    #[must_use]
    pub const fn from_winner(side: Side) -> Self {
        match side {
            Side::Player => Outcome::PlayerWin,
            Side::Ai => Outcome::AiWin,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWin => Some(Side::Player),
            Outcome::AiWin => Some(Side::Ai),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::PlayerWin => "player wins",
            Outcome::AiWin => "ai wins",
            Outcome::Draw => "draw",
        };
        f.write_str(text)
    }
}

const fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

/// The eight lines in evaluation order: rows, columns, main diagonal,
/// anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

/// First completed line on the board, with the side that completed it.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Side, [Position; 3])> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.map(|pos| board.cell(pos));
        match a.side() {
            Some(side) if a == b && b == c => Some((side, line)),
            _ => None,
        }
    })
}

/// Classify the board.
///
/// Lines are checked before fullness, so a full board with a completed
/// line is a win, never a draw.
#[must_use]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((side, _)) = winning_line(board) {
        return Outcome::from_winner(side);
    }
    if board.cells().all(|cell| cell != Cell::Empty) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

//! Sides and cell contents.
//!
//! ## Side
//!
//! The two participants: the human `Player` (numeric code 1, mark `X`) and
//! the `Ai` (numeric code 2, mark `O`).
//!
//! ## Cell
//!
//! The content of one board square. `Cell::Empty` is code 0.

use serde::{Deserialize, Serialize};

/// One of the two sides of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human (or scripted) side, code 1.
    Player,
    /// The search-driven side, code 2.
    Ai,
}

impl Side {
    /// Both sides, Player first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Ai];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// The cell value this side places.
    #[must_use]
    pub const fn mark(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Ai => Cell::Ai,
        }
    }

    /// Numeric code (Player = 1, Ai = 2).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Side::Player => 1,
            Side::Ai => 2,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark().symbol())
    }
}

/// Content of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Ai,
}

impl Cell {
    /// The side owning this cell, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Side::Player),
            Cell::Ai => Some(Side::Ai),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric code (Empty = 0, Player = 1, Ai = 2).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Player => 1,
            Cell::Ai => 2,
        }
    }

    /// Decode a numeric cell code.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Player),
            2 => Some(Cell::Ai),
            _ => None,
        }
    }

    /// Printable symbol: `X`, `O`, or a space.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player => 'X',
            Cell::Ai => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Ai);
        assert_eq!(Side::Ai.opponent(), Side::Player);
    }

    #[test]
    fn test_side_codes() {
        assert_eq!(Side::Player.as_u8(), 1);
        assert_eq!(Side::Ai.as_u8(), 2);
        assert_eq!(Side::Player.mark().as_u8(), 1);
        assert_eq!(Side::Ai.mark().as_u8(), 2);
    }

    #[test]
    fn test_cell_round_trip_codes() {
        for code in 0..3u8 {
            let cell = Cell::from_u8(code).unwrap();
            assert_eq!(cell.as_u8(), code);
        }
        assert_eq!(Cell::from_u8(3), None);
    }

    #[test]
    fn test_cell_side() {
        assert_eq!(Cell::Empty.side(), None);
        assert_eq!(Cell::Player.side(), Some(Side::Player));
        assert_eq!(Cell::Ai.side(), Some(Side::Ai));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Side::Player), "X");
        assert_eq!(format!("{}", Side::Ai), "O");
    }
}

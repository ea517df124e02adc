//! The 3x3 board and move primitives.
//!
//! ## Move Discipline
//!
//! `apply_move` only ever writes into an empty, in-range cell. `undo_move`
//! is the backtracking primitive for the search: every cell the search
//! writes is reset before the frame that wrote it returns, so sibling
//! subtrees always see the same board.
//!
//! ## Move Order
//!
//! `legal_moves` enumerates in row-major order. The search relies on this
//! order for tie-breaking: among equally valued moves the earliest one wins.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::MoveError;

use super::side::{Cell, Side};

/// Board edge length.
pub const SIZE: usize = 3;

/// Number of squares on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Legal moves of one position. Never more than nine, so never heap allocated.
pub type MoveList = SmallVec<[Position; CELLS]>;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position. Coordinates are not range checked.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Create a position from caller-supplied coordinates, rejecting
    /// anything outside `[0, 3)`.
    pub fn try_new(row: usize, col: usize) -> Result<Self, MoveError> {
        if row < SIZE && col < SIZE {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    /// Row-major index in `0..9`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new((index / SIZE) as u8, (index % SIZE) as u8)
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.row as usize) < SIZE && (self.col as usize) < SIZE
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELLS).map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

/// A 3x3 grid of cells.
///
/// Whose turn it is lives with the session, not here: the search mutates
/// the board with its own maximizing flag and never touches the live turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from numeric rows (0 = empty, 1 = Player, 2 = Ai).
    ///
    /// ```
    /// use rust_ttt::core::{Board, Cell, Position};
    ///
    /// let board = Board::from_rows([[1, 1, 0], [2, 2, 0], [0, 0, 0]]).unwrap();
    /// assert_eq!(board.cell(Position::new(1, 0)), Cell::Ai);
    /// assert_eq!(board.occupied_count(), 4);
    /// ```
    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> Result<Self, MoveError> {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                board.cells[r][c] = Cell::from_u8(value).ok_or(MoveError::InvalidCell { value })?;
            }
        }
        Ok(board)
    }

    /// Numeric encoding of the board, inverse of [`Board::from_rows`].
    #[must_use]
    pub fn to_rows(&self) -> [[u8; SIZE]; SIZE] {
        self.cells.map(|row| row.map(Cell::as_u8))
    }

    /// Content of a cell. Out-of-range positions read as empty.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Cell {
        if pos.is_valid() {
            self.cells[pos.row as usize][pos.col as usize]
        } else {
            Cell::Empty
        }
    }

    /// The raw grid, row by row.
    #[must_use]
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Place `side`'s mark at `(row, col)`.
    ///
    /// Returns `false` and leaves the board untouched if the coordinates are
    /// out of range or the cell is occupied.
    pub fn apply_move(&mut self, row: usize, col: usize, side: Side) -> bool {
        self.try_apply_move(row, col, side).is_ok()
    }

    /// Typed variant of [`Board::apply_move`].
    pub fn try_apply_move(&mut self, row: usize, col: usize, side: Side) -> Result<(), MoveError> {
        let pos = Position::try_new(row, col)?;
        if !self.cell(pos).is_empty() {
            return Err(MoveError::Occupied { row, col });
        }
        self.place(pos, side);
        Ok(())
    }

    /// Reset a cell to empty.
    ///
    /// Backtracking primitive for the search. Out-of-range coordinates are
    /// ignored.
    pub fn undo_move(&mut self, row: usize, col: usize) {
        if let Ok(pos) = Position::try_new(row, col) {
            self.clear(pos);
        }
    }

    /// Unchecked placement used on positions taken from `legal_moves`.
    #[inline]
    pub(crate) fn place(&mut self, pos: Position, side: Side) {
        self.cells[pos.row as usize][pos.col as usize] = side.mark();
    }

    #[inline]
    pub(crate) fn clear(&mut self, pos: Position) {
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        Position::all().filter(|&pos| self.cell(pos).is_empty()).collect()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells().all(Cell::is_empty)
    }

    /// The same position with every Player mark turned into an Ai mark and
    /// vice versa. Lets the Ai-maximizing search play for the Player.
    #[must_use]
    pub fn swap_sides(&self) -> Self {
        let swap = |cell: Cell| match cell.side() {
            Some(side) => side.opponent().mark(),
            None => Cell::Empty,
        };
        Self {
            cells: self.cells.map(|row| row.map(swap)),
        }
    }

    /// Number of marks placed by `side`.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.cells().filter(|&cell| cell == side.mark()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  0 1 2")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Move sources for the Player side when no human is at the keyboard.

use crate::core::{Board, GameRng, Position};
use crate::search::{MinimaxSearch, SearchConfig};

/// Chooses the Player's move on a board.
pub trait Opponent {
    /// Pick a move for the Player.
    ///
    /// Returns `None` if the board has no empty cell.
    fn choose_move(&mut self, board: &Board, rng: &mut GameRng) -> Option<Position>;

    /// Called before every game of a batch. Stateless opponents ignore it.
    fn new_game(&mut self) {}
}

/// Uniformly random legal moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomOpponent;

impl Opponent for RandomOpponent {
    fn choose_move(&mut self, board: &Board, rng: &mut GameRng) -> Option<Position> {
        rng.choose(&board.legal_moves()).copied()
    }
}

/// Replays a fixed move list.
///
/// Once the script runs out, or a scripted cell is already taken, the
/// first legal move is played instead.
#[derive(Clone, Debug, Default)]
pub struct ScriptedOpponent {
    moves: Vec<Position>,
    next: usize,
}

impl ScriptedOpponent {
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            next: 0,
        }
    }

    /// Start the script over for a new game.
    pub fn rewind(&mut self) {
        self.next = 0;
    }
}

impl Opponent for ScriptedOpponent {
    fn new_game(&mut self) {
        self.rewind();
    }

    fn choose_move(&mut self, board: &Board, _rng: &mut GameRng) -> Option<Position> {
        let legal = board.legal_moves();
        let scripted = self.moves.get(self.next).copied();
        self.next += 1;

        match scripted {
            Some(pos) if legal.contains(&pos) => Some(pos),
            _ => legal.first().copied(),
        }
    }
}

/// Optimal play for the Player.
///
/// Runs the same minimax on the board with the sides swapped, so the
/// Player gets exactly the Ai's strength.
#[derive(Clone, Debug, Default)]
pub struct PerfectOpponent {
    search: MinimaxSearch,
}

impl PerfectOpponent {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: MinimaxSearch::new(config),
        }
    }
}

impl Opponent for PerfectOpponent {
    fn choose_move(&mut self, board: &Board, _rng: &mut GameRng) -> Option<Position> {
        let mut mirrored = board.swap_sides();
        self.search.choose_best_move(&mut mirrored)
    }
}

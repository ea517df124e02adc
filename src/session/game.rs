//! A game session: one live board, the turn indicator, the engine, and
//! counters that outlive individual games.

use tracing::{debug, instrument};

use crate::core::{Board, GameRng, Position, Side};
use crate::error::MoveError;
use crate::rules::{evaluate, Outcome};
use crate::search::MinimaxSearch;

use super::config::SessionConfig;
use super::snapshot::{GameTally, MetricsSnapshot};

/// The engine's public surface.
///
/// The turn indicator alternates exactly once per accepted move. The
/// search never touches it: it works on the board with its own
/// maximizing flag.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    turn: Side,
    rng: GameRng,
    search: MinimaxSearch,
    tally: GameTally,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// Fresh session with an empty board.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let turn = config.first_player.resolve(&mut rng);

        Self {
            search: MinimaxSearch::new(config.search.clone()),
            config,
            board: Board::new(),
            turn,
            rng,
            tally: GameTally::default(),
        }
    }

    /// Start the next game: empty board, opening side per configuration.
    /// Metrics and tallies are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = self.config.first_player.resolve(&mut self.rng);
    }

    /// Override whose turn it is.
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
    }

    /// Play the Player's mark at `(row, col)`.
    ///
    /// Returns `false` without changing anything if it is not the Player's
    /// turn or the move is out of range or occupied. Whether the game is
    /// already decided is for the caller to check.
    pub fn apply_player_move(&mut self, row: usize, col: usize) -> bool {
        self.try_apply_player_move(row, col).is_ok()
    }

    /// Typed variant of [`Session::apply_player_move`].
    #[instrument(skip(self), level = "debug")]
    pub fn try_apply_player_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.turn != Side::Player {
            debug!(expected = %self.turn, "player moved out of turn");
            return Err(MoveError::NotYourTurn { expected: self.turn });
        }
        self.play(row, col)
    }

    /// Play the mark of whichever side is to move.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        self.play(row, col).is_ok()
    }

    fn play(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        self.board.try_apply_move(row, col, self.turn)?;
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Let the engine move.
    ///
    /// Returns `false` if it is not the Ai's turn or the board has no empty
    /// cell; otherwise searches, plays the chosen move, and returns `true`.
    /// A decided game is not checked for: the caller stops the game loop.
    #[instrument(skip(self), level = "debug")]
    pub fn ai_take_turn(&mut self) -> bool {
        if self.turn != Side::Ai {
            return false;
        }

        let Some(pos) = self.search.choose_best_move(&mut self.board) else {
            return false;
        };

        debug!(%pos, nodes = self.search.metrics().nodes_explored, "ai move");
        self.board.place(pos, Side::Ai);
        self.turn = Side::Player;
        true
    }

    /// Ask the engine what it would play, without playing it.
    ///
    /// Runs on a scratch search, so the session metrics only ever count
    /// real decisions.
    #[must_use]
    pub fn suggest_move(&self) -> Option<Position> {
        let mut board = self.board;
        MinimaxSearch::new(self.config.search.clone()).choose_best_move(&mut board)
    }

    /// Current outcome, recomputed from the board.
    #[must_use]
    pub fn evaluate_outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Count a finished game. Calling this twice for one game counts it
    /// twice.
    #[instrument(skip(self), level = "debug")]
    pub fn record_game_result(&mut self, outcome: Outcome) {
        self.tally.record(outcome);
    }

    #[must_use]
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::capture(self.search.metrics(), &self.tally)
    }

    #[must_use]
    pub fn current_turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn tally(&self) -> &GameTally {
        &self.tally
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

//! Simulation integration tests.
//!
//! The engine plays whole games against random, scripted, and perfect
//! opponents. Whatever the opponent, the engine must never lose.

use rust_ttt::core::{Board, GameRng, Position};
use rust_ttt::error::SimulationError;
use rust_ttt::rules::Outcome;
use rust_ttt::session::{FirstPlayer, Session, SessionConfig};
use rust_ttt::sim::{
    play_game, Opponent, PerfectOpponent, RandomOpponent, ScriptedOpponent, Simulation,
    SimulationConfig, MAX_GAMES,
};

// =============================================================================
// Random Opponent Tests
// =============================================================================

#[test]
fn test_never_loses_to_random_play() {
    for first in [FirstPlayer::Player, FirstPlayer::Ai, FirstPlayer::Random] {
        let sim = Simulation::new(
            SimulationConfig::new()
                .with_games(60)
                .with_first_player(first)
                .with_seed(2024),
        );
        let report = sim.run(&mut RandomOpponent).unwrap();

        assert!(report.ai_undefeated(), "lost a game with {:?} opening", first);
        assert_eq!(report.metrics.games_played, 60);
        assert!(report.outcomes.iter().all(|o| *o != Outcome::PlayerWin));
    }
}

#[test]
fn test_random_play_is_seeded() {
    let config = SimulationConfig::new().with_games(20).with_seed(11);
    let a = Simulation::new(config.clone()).run(&mut RandomOpponent).unwrap();
    let b = Simulation::new(config).run(&mut RandomOpponent).unwrap();

    assert_eq!(a.outcomes, b.outcomes);
}

#[test]
fn test_engine_beats_random_sometimes() {
    let sim = Simulation::new(SimulationConfig::new().with_games(50).with_seed(3));
    let report = sim.run(&mut RandomOpponent).unwrap();

    assert!(report.metrics.wins_ai > 0);
}

// =============================================================================
// Perfect Opponent Tests
// =============================================================================

#[test]
fn test_perfect_play_always_draws() {
    for first in [FirstPlayer::Player, FirstPlayer::Ai] {
        let sim = Simulation::new(
            SimulationConfig::new()
                .with_games(3)
                .with_first_player(first),
        );
        let report = sim.run(&mut PerfectOpponent::default()).unwrap();

        assert_eq!(report.metrics.draws, 3, "{:?} opening", first);
        assert!(report.outcomes.iter().all(|o| *o == Outcome::Draw));
    }
}

// =============================================================================
// Scripted Opponent Tests
// =============================================================================

/// Scripted opponent that remembers the first move it played in each game.
struct OpeningRecorder {
    script: ScriptedOpponent,
    openings: Vec<Position>,
    fresh: bool,
}

impl Opponent for OpeningRecorder {
    fn new_game(&mut self) {
        self.script.new_game();
        self.fresh = true;
    }

    fn choose_move(&mut self, board: &Board, rng: &mut GameRng) -> Option<Position> {
        let pos = self.script.choose_move(board, rng);
        if self.fresh {
            self.openings.extend(pos);
            self.fresh = false;
        }
        pos
    }
}

#[test]
fn test_script_replays_in_every_game() {
    let sim = Simulation::new(
        SimulationConfig::new()
            .with_games(4)
            .with_first_player(FirstPlayer::Player),
    );
    let mut opponent = OpeningRecorder {
        script: ScriptedOpponent::new([Position::new(1, 1)]),
        openings: Vec::new(),
        fresh: false,
    };

    let report = sim.run(&mut opponent).unwrap();

    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(opponent.openings, vec![Position::new(1, 1); 4]);
}

#[test]
fn test_new_game_rewinds_script() {
    let mut opponent = ScriptedOpponent::new([Position::new(2, 2)]);
    let mut rng = GameRng::new(0);
    let board = Board::new();

    assert_eq!(opponent.choose_move(&board, &mut rng), Some(Position::new(2, 2)));
    assert_eq!(opponent.choose_move(&board, &mut rng), Some(Position::new(0, 0)));

    opponent.new_game();
    assert_eq!(opponent.choose_move(&board, &mut rng), Some(Position::new(2, 2)));
}

#[test]
fn test_scripted_blunder_is_punished() {
    // Corner, then the opposite edge, ignoring every threat.
    let mut session = Session::new(SessionConfig::default().with_first_player(FirstPlayer::Player));
    let mut rng = GameRng::new(0);
    let mut opponent = ScriptedOpponent::new([
        Position::new(0, 0),
        Position::new(2, 1),
        Position::new(2, 0),
        Position::new(0, 2),
    ]);

    let outcome = play_game(&mut session, &mut opponent, &mut rng);

    assert!(outcome.is_terminal());
    assert_ne!(outcome, Outcome::PlayerWin);
}

#[test]
fn test_exhausted_script_falls_back_to_legal_moves() {
    let mut session = Session::new(SessionConfig::default().with_first_player(FirstPlayer::Player));
    let mut rng = GameRng::new(0);
    let mut opponent = ScriptedOpponent::new([Position::new(1, 1)]);

    let outcome = play_game(&mut session, &mut opponent, &mut rng);

    assert!(outcome.is_terminal());
    assert_ne!(outcome, Outcome::PlayerWin);
}

#[test]
fn test_session_records_each_game_once() {
    let sim = Simulation::new(
        SimulationConfig::new()
            .with_games(4)
            .with_first_player(FirstPlayer::Player),
    );
    let mut opponent = ScriptedOpponent::new([Position::new(1, 1)]);
    let report = sim.run(&mut opponent).unwrap();

    let m = &report.metrics;
    assert_eq!(m.games_played, 4);
    assert_eq!(m.wins_player + m.wins_ai + m.draws, 4);
    assert_eq!(report.outcomes.len(), 4);
}

// =============================================================================
// Limits And Reporting Tests
// =============================================================================

#[test]
fn test_max_games_limit() {
    let ok = Simulation::new(SimulationConfig::new().with_games(MAX_GAMES));
    assert_eq!(ok.config().games, 999);

    let too_many = Simulation::new(SimulationConfig::new().with_games(MAX_GAMES + 1));
    assert_eq!(
        too_many.run(&mut RandomOpponent),
        Err(SimulationError::TooManyGames {
            requested: 1000,
            max: 999
        })
    );
}

#[test]
fn test_report_summary() {
    let sim = Simulation::new(SimulationConfig::new().with_games(3).with_seed(8));
    let report = sim.run(&mut RandomOpponent).unwrap();
    let text = report.to_string();

    assert!(text.starts_with("===== STATISTICS ====="));
    assert!(text.contains("Games played: 3"));
    assert!(text.contains("Average nodes explored per move:"));
}

#[test]
fn test_report_serializes() {
    let sim = Simulation::new(SimulationConfig::new().with_games(2).with_seed(1));
    let report = sim.run(&mut RandomOpponent).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: rust_ttt::sim::SimulationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.outcomes, report.outcomes);
    assert_eq!(back.metrics.games_played, 2);
}

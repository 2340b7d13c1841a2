//! Integration tests for the shared simulation, driven only through the public API

use tui_snaketris::core::{GameState, Rules, ScriptedRng};
use tui_snaketris::types::{
    Direction, GameAction, GameOverReason, PieceKind, Point, SNAKE_INTERVAL_MS, SNAKE_START,
};

fn only(kind: PieceKind) -> ScriptedRng {
    ScriptedRng::pieces(&[kind])
}

/// Soft drops until the active piece locks (a fresh piece appears at the top).
fn drop_until_lock(state: &mut GameState<ScriptedRng>) {
    for _ in 0..40 {
        let before = state.active();
        state.apply_action(GameAction::SoftDrop);
        if state.active().y < before.y || state.game_over() {
            return;
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_game_lifecycle() {
    let state = GameState::new(12345);

    assert!(!state.game_over());
    assert_eq!(state.total_score(), 0);
    assert_eq!(state.snake().head(), SNAKE_START);
    assert_eq!(state.snake().direction(), Direction::Right);
    assert!(state.apple().is_some());
}

#[test]
fn test_six_o_pieces_clear_two_lines() {
    let mut state = GameState::with_rng(Rules::default(), only(PieceKind::O));

    for target in [0i8, 2, 4, 6, 8, 10] {
        while state.active().x > target {
            assert!(state.apply_action(GameAction::MoveLeft));
        }
        while state.active().x < target {
            assert!(state.apply_action(GameAction::MoveRight));
        }
        drop_until_lock(&mut state);
    }

    assert_eq!(state.lines(), 2);
    assert_eq!(state.tetris_score(), 20);
    assert_eq!(state.snake_score(), 0);
    assert_eq!(state.grid().solid_count(), 0);
}

#[test]
fn test_snake_steers_to_apple() {
    // Every pick is 0: I pieces, and the apple takes the first free cell.
    let mut state = GameState::with_rng(Rules::default(), ScriptedRng::new(vec![0]));
    assert_eq!(state.apple(), Some(Point::new(0, 0)));

    assert!(state.apply_action(GameAction::Turn(Direction::Up)));
    for _ in 0..10 {
        state.tick(SNAKE_INTERVAL_MS);
    }
    assert_eq!(state.snake().head(), Point::new(3, 0));

    assert!(state.apply_action(GameAction::Turn(Direction::Left)));
    state.tick(SNAKE_INTERVAL_MS);
    state.tick(SNAKE_INTERVAL_MS);
    let events = state.tick(SNAKE_INTERVAL_MS);

    assert!(events.apple_eaten);
    assert_eq!(state.snake().head(), Point::new(0, 0));
    assert_eq!(state.snake().len(), 2);
    assert_eq!(state.snake_score(), 1);
    assert_eq!(state.total_score(), 1);
    // First free cell after the head (0,0) and the tail (1,0)
    assert_eq!(state.apple(), Some(Point::new(2, 0)));
    assert!(!state.game_over());
}

#[test]
fn test_snake_runs_into_right_wall() {
    let mut state = GameState::with_rng(Rules::default(), only(PieceKind::I));

    let mut reason = None;
    for _ in 0..20 {
        reason = state.tick(SNAKE_INTERVAL_MS).game_over;
        if reason.is_some() {
            break;
        }
    }

    assert_eq!(reason, Some(GameOverReason::SnakeHitWall));
    assert_eq!(state.snake().head().x, 11);
    assert_eq!(
        state.game_over_reason().map(|r| r.to_string()),
        Some("Snake hit a wall".to_string())
    );
}

#[test]
fn test_practice_mode_wraps_snake() {
    let rules = Rules::default().with_game_over_disabled(true);
    let mut state = GameState::with_rng(rules, only(PieceKind::I));

    // (3,10) -> (11,10) takes 8 steps, the 9th wraps to column 0.
    for _ in 0..9 {
        state.tick(SNAKE_INTERVAL_MS);
    }

    assert!(!state.game_over());
    assert_eq!(state.snake().head(), Point::new(0, 10));
}

#[test]
fn test_stacking_to_the_top_fills_board() {
    let mut state = GameState::with_rng(Rules::default(), only(PieceKind::O));

    let mut guard = 0;
    while !state.game_over() && guard < 1000 {
        state.apply_action(GameAction::SoftDrop);
        guard += 1;
    }

    assert_eq!(state.game_over_reason(), Some(GameOverReason::BoardFilled));
    assert_eq!(state.tetris_score(), 0);
}

#[test]
fn test_actions_ignored_after_game_over_until_restart() {
    let mut state = GameState::with_rng(Rules::default(), only(PieceKind::T));
    while !state.game_over() {
        state.tick(SNAKE_INTERVAL_MS);
    }

    let snap = state.snapshot();
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::RotateCw));
    assert!(!state.apply_action(GameAction::Turn(Direction::Up)));
    state.tick(5000);
    assert_eq!(state.snapshot(), snap);

    assert!(state.apply_action(GameAction::Restart));
    assert!(!state.game_over());
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.snake().head(), SNAKE_START);
    assert_eq!(state.total_score(), 0);
}

#[test]
fn test_toggle_game_over_action() {
    let mut state = GameState::new(3);
    assert!(!state.game_over_disabled());
    assert!(state.apply_action(GameAction::ToggleGameOver));
    assert!(state.game_over_disabled());
    assert!(state.snapshot().disable_game_over);
    assert!(state.apply_action(GameAction::ToggleGameOver));
    assert!(!state.game_over_disabled());
}

#[test]
fn test_restart_keeps_rules() {
    let rules = Rules::default().with_game_over_disabled(true);
    let mut state = GameState::with_rng(rules, only(PieceKind::L));
    state.apply_action(GameAction::Restart);
    assert!(state.game_over_disabled());
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::Turn(Direction::Down),
        GameAction::SoftDrop,
        GameAction::MoveRight,
        GameAction::Turn(Direction::Left),
        GameAction::RotateCcw,
    ];

    let play = |seed: u32| {
        let mut state = GameState::new(seed);
        for (i, action) in script.iter().cycle().take(200).enumerate() {
            state.apply_action(*action);
            state.tick(16 + (i as u32 % 5) * 40);
        }
        state.snapshot().fingerprint()
    };

    assert_eq!(play(77), play(77));
}

#[test]
fn test_game_over_via_soft_drop_reports_reason() {
    let mut state = GameState::with_rng(Rules::default(), only(PieceKind::I));
    // Vertical I pieces stacked in one column reach the spawn anchor quickly.
    state.apply_action(GameAction::RotateCw);
    while !state.game_over() {
        let before = state.active();
        state.apply_action(GameAction::SoftDrop);
        if state.active().y < before.y && !state.game_over() {
            state.apply_action(GameAction::RotateCw);
        }
    }
    assert_eq!(state.game_over_reason(), Some(GameOverReason::BoardFilled));
}

//! Engine tests - the per-tick step orchestration, end to end
//!
//! All scenarios drive a scripted piece source, so every run is exact.

use gridfall::core::{GameState, ScriptedSource, StepOutcome};
use gridfall::types::{Action, PieceKind, Rotation, BOARD_COLS, BOARD_ROWS, GRAVITY_INTERVAL};

fn scripted(kinds: &[PieceKind]) -> GameState<ScriptedSource> {
    GameState::with_source(ScriptedSource::new(kinds.to_vec()))
}

fn idle_step(game: &mut GameState<ScriptedSource>) -> StepOutcome {
    let mut action = Action::none();
    game.step(&mut action)
}

fn occupied_cells(game: &GameState<ScriptedSource>) -> usize {
    game.board().cells().iter().filter(|c| c.is_some()).count()
}

/// Step with nothing held until the active piece locks (the board's
/// occupied-cell count changes; a lock adds 4 cells and a clear removes a
/// multiple of 12, so the count never stays put across a lock).
fn step_until_lock(game: &mut GameState<ScriptedSource>, max_ticks: u32) -> StepOutcome {
    let before = occupied_cells(game);
    for _ in 0..max_ticks {
        let out = idle_step(game);
        if occupied_cells(game) != before || out.game_over {
            return out;
        }
    }
    panic!("no lock within {} ticks", max_ticks);
}

#[test]
fn test_gravity_applies_every_fifth_tick() {
    let mut game = scripted(&[PieceKind::O]);

    for _ in 0..GRAVITY_INTERVAL - 1 {
        idle_step(&mut game);
        assert_eq!(game.active().y, 0);
    }
    idle_step(&mut game);
    assert_eq!(game.active().y, 1);

    for _ in 0..GRAVITY_INTERVAL - 1 {
        idle_step(&mut game);
        assert_eq!(game.active().y, 1);
    }
    idle_step(&mut game);
    assert_eq!(game.active().y, 2);
}

#[test]
fn test_left_wins_over_right_with_no_fallback() {
    let mut game = scripted(&[PieceKind::O]);
    let both = Action {
        left: true,
        right: true,
        ..Action::none()
    };

    // At the left wall, left is blocked and right is NOT attempted.
    let mut action = both;
    game.step(&mut action);
    assert_eq!(game.active().x, 0);

    // Step right twice, then both flags again: only left applies.
    for _ in 0..2 {
        let mut action = Action {
            right: true,
            ..Action::none()
        };
        game.step(&mut action);
    }
    assert_eq!(game.active().x, 2);

    let mut action = both;
    game.step(&mut action);
    assert_eq!(game.active().x, 1);
}

#[test]
fn test_rotation_applies_at_same_offset_and_consumes_flag() {
    let mut game = scripted(&[PieceKind::I]);

    let mut action = Action {
        rotate: true,
        ..Action::none()
    };
    game.step(&mut action);

    assert_eq!(game.active().rotation, Rotation::R90);
    assert!(!action.rotate, "rotate flag must be consumed");
    assert_eq!((game.active().x, game.active().y), (0, 0));
}

#[test]
fn test_blocked_rotation_is_dropped_but_still_consumed() {
    let mut game = scripted(&[PieceKind::I]);

    // Walk the vertical bar to the right wall; the horizontal variant can
    // no longer fit there.
    for _ in 0..(BOARD_COLS - 1) {
        let mut action = Action {
            right: true,
            ..Action::none()
        };
        game.step(&mut action);
    }
    assert_eq!(game.active().x, BOARD_COLS as i8 - 1);

    let mut action = Action {
        rotate: true,
        ..Action::none()
    };
    game.step(&mut action);

    assert_eq!(game.active().rotation, Rotation::R0);
    assert!(!action.rotate, "a blocked rotate is still consumed");
}

#[test]
fn test_bar_falls_to_the_bottom_and_reward_reflects_shaping() {
    let mut game = scripted(&[PieceKind::I]);

    let out = step_until_lock(&mut game, 200);

    // The bar locked with its top-left at row 12, reaching the bottom row:
    // drop bonus 10 * 12, stack penalty 10 * (16 - 12).
    assert_eq!(out.reward, 120 - 40);
    assert_eq!(out.score, 0);
    assert!(!out.game_over);

    // 12 descents plus the locking gravity step, one every 5th frame.
    assert_eq!(game.frame(), 13 * GRAVITY_INTERVAL);

    // Exactly 4 cells, a single column at the left wall, bottom row filled.
    let occupied: Vec<(i8, i8)> = (0..BOARD_COLS as i8)
        .flat_map(|x| (0..BOARD_ROWS as i8).map(move |y| (x, y)))
        .filter(|&(x, y)| game.board().get(x, y) == Some(Some(PieceKind::I)))
        .collect();
    assert_eq!(occupied, vec![(0, 12), (0, 13), (0, 14), (0, 15)]);
    assert_eq!(game.board().highest_occupied_row(), 12);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut game = scripted(&[PieceKind::I]);

    // Three bars stack in column 0 without ending the game.
    for _ in 0..3 {
        let out = step_until_lock(&mut game, 200);
        assert!(!out.game_over);
    }
    assert_eq!(game.board().highest_occupied_row(), 4);

    // The fourth fills the column to the top; the next spawn collides.
    let out = step_until_lock(&mut game, 200);
    assert!(out.game_over);
    assert_eq!(out.reward, -160 - 10_000);
    assert_eq!(out.score, 0);
    assert!(game.game_over());
}

#[test]
fn test_steps_after_game_over_mutate_nothing() {
    let mut game = scripted(&[PieceKind::I]);
    for _ in 0..4 {
        step_until_lock(&mut game, 200);
    }
    assert!(game.game_over());

    let board_before = game.board().clone();
    let active_before = game.active();
    let frame_before = game.frame();
    let score_before = game.score();

    for _ in 0..10 {
        let mut action = Action {
            left: true,
            soft_drop: true,
            rotate: true,
            ..Action::none()
        };
        let out = game.step(&mut action);
        assert_eq!(out.reward, 0);
        assert!(out.game_over);
        assert_eq!(out.score, score_before);
    }

    assert_eq!(game.board(), &board_before);
    assert_eq!(game.active(), active_before);
    assert_eq!(game.frame(), frame_before);
}

#[test]
fn test_reset_after_game_over_starts_fresh() {
    let mut game = scripted(&[PieceKind::I]);
    for _ in 0..4 {
        step_until_lock(&mut game, 200);
    }
    assert!(game.game_over());

    game.reset();
    assert!(!game.game_over());
    assert_eq!(game.score(), 0);
    assert_eq!(game.frame(), 0);
    assert_eq!(game.board().highest_occupied_row(), BOARD_ROWS as usize);

    // The simulation accepts ticks again.
    let out = idle_step(&mut game);
    assert!(!out.game_over);
    assert_eq!(game.frame(), 1);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(99);
    let mut b = GameState::new(99);

    for i in 0..300 {
        let mut action_a = Action {
            left: i % 3 == 0,
            right: i % 7 == 0,
            rotate: i % 11 == 0,
            ..Action::none()
        };
        let mut action_b = action_a;
        assert_eq!(a.step(&mut action_a), b.step(&mut action_b));
        assert_eq!(a.active(), b.active());
    }
    assert_eq!(a.board(), b.board());
}

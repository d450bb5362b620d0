//! Terminal game runner (default binary).
//!
//! The clock/loop driver: polls input with a timeout until the next tick
//! deadline, steps the simulation exactly once per tick, and renders the
//! current state. Soft drop shortens the tick period; the gravity interval
//! stays fixed in tick units. Rendering pauses while the terminal is
//! unfocused; the simulation does not.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{tick_interval_ms, GameState};
use gridfall::input::{is_restart, should_quit, InputHandler};
use gridfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(seed_from_clock());
    let view = GameView::default();
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let mut tick_ms = tick_interval_ms(false);
    let mut has_focus = true;

    loop {
        if has_focus {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&game, Viewport::new(w, h));
            term.draw(&fb)?;
        }

        // Input with timeout until the next tick deadline.
        let timeout = Duration::from_millis(tick_ms as u64)
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if game.game_over() && is_restart(key) {
                            game.reset();
                            input.reset();
                        } else {
                            input.handle_key_press(key.code);
                        }
                    }
                    KeyEventKind::Repeat => {
                        input.handle_key_repeat(key.code);
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                },
                Event::FocusGained => {
                    has_focus = true;
                    term.invalidate();
                }
                Event::FocusLost => {
                    has_focus = false;
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(tick_ms as u64) {
            last_tick = Instant::now();

            let mut action = input.poll_action();
            game.step(&mut action);
            tick_ms = tick_interval_ms(action.soft_drop);
        }
    }
}

/// Seed the uniform piece source from the wall clock.
fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

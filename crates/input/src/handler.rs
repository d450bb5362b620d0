//! Held-state tracking for the per-tick action vector.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::types::Action;

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held movement keys and the pending one-shot rotate request.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left_held: bool,
    right_held: bool,
    down_held: bool,
    rotate_pending: bool,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left_held: false,
            right_held: false,
            down_held: false,
            rotate_pending: false,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn handle_key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.left_held = true;
                self.last_key_time = Instant::now();
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.right_held = true;
                self.last_key_time = Instant::now();
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.down_held = true;
                self.last_key_time = Instant::now();
            }
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                // One-shot: stays pending until the next poll hands it out.
                self.rotate_pending = true;
            }
            _ => {}
        }
    }

    /// Refresh held state on a repeat event without re-firing the one-shot
    /// rotate (terminals speaking the kitty protocol report holds this way).
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left
            | KeyCode::Char('a')
            | KeyCode::Char('A')
            | KeyCode::Right
            | KeyCode::Char('d')
            | KeyCode::Char('D')
            | KeyCode::Down
            | KeyCode::Char('s')
            | KeyCode::Char('S') => {
                self.last_key_time = Instant::now();
            }
            _ => {}
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.left_held = false;
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.right_held = false;
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.down_held = false;
            }
            _ => {}
        }
    }

    /// Whether soft drop is currently held (drives the tick cadence).
    pub fn soft_drop_held(&self) -> bool {
        self.down_held
    }

    /// Build the action vector for this tick.
    ///
    /// Held flags survive across polls; the rotate request is handed out
    /// exactly once per press.
    pub fn poll_action(&mut self) -> Action {
        // Auto-release when the terminal never reported a release.
        if self.last_key_time.elapsed().as_millis() as u32 > self.key_release_timeout_ms {
            self.left_held = false;
            self.right_held = false;
            self.down_held = false;
        }

        let action = Action {
            left: self.left_held,
            right: self.right_held,
            soft_drop: self.down_held,
            rotate: self.rotate_pending,
        };
        self.rotate_pending = false;
        action
    }

    pub fn reset(&mut self) {
        self.left_held = false;
        self.right_held = false;
        self.down_held = false;
        self.rotate_pending = false;
        self.last_key_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn handler() -> InputHandler {
        InputHandler::new().with_key_release_timeout_ms(10_000)
    }

    #[test]
    fn test_movement_keys_stay_held_across_polls() {
        let mut ih = handler();
        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Down);

        for _ in 0..3 {
            let action = ih.poll_action();
            assert!(action.left);
            assert!(!action.right);
            assert!(action.soft_drop);
        }
    }

    #[test]
    fn test_rotate_fires_once_per_press() {
        let mut ih = handler();
        ih.handle_key_press(KeyCode::Up);

        assert!(ih.poll_action().rotate);
        assert!(!ih.poll_action().rotate);

        ih.handle_key_press(KeyCode::Up);
        assert!(ih.poll_action().rotate);
    }

    #[test]
    fn test_release_clears_held_state() {
        let mut ih = handler();
        ih.handle_key_press(KeyCode::Right);
        assert!(ih.poll_action().right);

        ih.handle_key_release(KeyCode::Right);
        assert!(!ih.poll_action().right);
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Left);

        // Simulate no key-release events by moving the last key time into the past.
        ih.last_key_time = Instant::now() - Duration::from_millis(51);

        let action = ih.poll_action();
        assert!(!action.left);
    }

    #[test]
    fn test_repeat_refreshes_hold_but_not_rotate() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Up);
        assert!(ih.poll_action().rotate);

        // A repeat keeps the hold alive past the timeout window.
        ih.last_key_time = Instant::now() - Duration::from_millis(40);
        ih.handle_key_repeat(KeyCode::Left);

        let action = ih.poll_action();
        assert!(action.left);
        // Repeats never re-arm the one-shot rotate.
        assert!(!action.rotate);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ih = handler();
        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Up);

        ih.reset();
        let action = ih.poll_action();
        assert_eq!(action, Action::none());
    }
}

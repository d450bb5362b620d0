//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into the per-tick [`crate::types::Action`]
//! vector. Movement keys are level-triggered held state (with an
//! auto-release timeout for terminals that do not emit key-release events);
//! rotation is edge-triggered and fires once per press.

pub mod handler;
pub mod map;

pub use gridfall_types as types;

pub use handler::InputHandler;
pub use map::{is_restart, should_quit};

//! Board simulation engine - pure, deterministic, and testable.
//!
//! This crate contains the whole rule set: grid state, collision testing,
//! placement, line clearing, scoring, and the per-tick step orchestration.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: piece selection goes through an injectable source,
//!   so a fixed seed (or a scripted sequence) reproduces a whole game
//! - **Testable**: every rule is reachable without a terminal
//! - **Portable**: runs headless as easily as under the TUI front end
//!
//! # Module structure
//!
//! - [`board`]: 12x16 grid with the collision predicate and line clearing
//! - [`pieces`]: precomputed (kind, rotation) -> mask lookup
//! - [`rng`]: seeded LCG behind the [`rng::PieceSource`] trait
//! - [`scoring`]: chain score table and placement reward shaping
//! - [`game_state`]: the [`GameState`] aggregate and its `step` loop
//!
//! # Example
//!
//! ```
//! use gridfall_core::GameState;
//! use gridfall_types::Action;
//!
//! let mut game = GameState::new(12345);
//!
//! // Drive one tick with nothing held.
//! let mut action = Action::none();
//! let out = game.step(&mut action);
//! assert!(!out.game_over);
//! ```
//!
//! # Timing
//!
//! `step` advances exactly one tick. Gravity applies every
//! [`gridfall_types::GRAVITY_INTERVAL`]th tick; the caller's clock decides
//! how long a tick lasts (see [`scoring::tick_interval_ms`]).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState, StepOutcome};
pub use pieces::{shape, ShapeMask, SPAWN_POSITION};
pub use rng::{PieceSource, ScriptedSource, SimpleRng, UniformSource};
pub use scoring::{chain_score, placement_reward, tick_interval_ms};

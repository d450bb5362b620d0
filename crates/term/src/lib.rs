//! Terminal renderer for the game.
//!
//! Renders into a simple framebuffer of styled character cells that is then
//! flushed to a raw-mode, alternate-screen terminal. The view layer is pure
//! (no I/O) so it can be unit-tested; only [`TerminalRenderer`] touches the
//! terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;

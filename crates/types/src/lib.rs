//! Core types shared across the workspace.
//!
//! Pure data types and configuration constants with no external dependencies.
//! Grid geometry, timing, and scoring numbers live here so every crate reads
//! the same configuration.

/// Board dimensions
pub const BOARD_COLS: u8 = 12;
pub const BOARD_ROWS: u8 = 16;

/// Simulation timing: milliseconds per tick, gravity cadence in ticks.
pub const TICK_MS: u32 = 50;
pub const GRAVITY_INTERVAL: u32 = 5;
/// Soft drop runs the tick clock this many times faster.
pub const SOFT_DROP_SPEEDUP: u32 = 3;

/// Terminal size of one grid cell (columns x rows).
pub const CELL_COLS: u16 = 2;
pub const CELL_ROWS: u16 = 1;

/// Score awarded per chain length of a single clear pass, indexed by chain.
pub const CHAIN_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Reward shaping weights (points per row) and the flat terminal penalty.
pub const STACK_PENALTY_WEIGHT: i32 = 10;
pub const DROP_BONUS_WEIGHT: i32 = 10;
pub const GAME_OVER_PENALTY: i32 = 10_000;

/// Falling piece kinds
///
/// O is the square, I the bar, L and J the two L-variants, S and Z the two
/// S-variants. There is no T piece in this rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    pub const COUNT: usize = 6;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Rotation states, clockwise quarter turns from the spawn orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }
}

/// Cell on the board (None = empty, Some = the kind that locked there)
pub type Cell = Option<PieceKind>;

/// Per-tick input vector.
///
/// `left`/`right`/`soft_drop` are level-triggered held flags. `rotate` is an
/// edge-triggered one-shot request; the engine clears it after consuming it,
/// whether or not the rotation applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Action {
    pub left: bool,
    pub right: bool,
    pub soft_drop: bool,
    pub rotate: bool,
}

impl Action {
    /// The empty action: nothing held, nothing requested.
    pub fn none() -> Self {
        Self::default()
    }
}

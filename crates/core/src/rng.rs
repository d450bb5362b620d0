//! RNG module - piece selection behind an injectable source
//!
//! The engine never touches process-wide randomness. Piece draws go through
//! the [`PieceSource`] trait: [`UniformSource`] wraps a seeded LCG for play,
//! [`ScriptedSource`] replays a fixed sequence for tests and demos. Same
//! seed, same game.

use gridfall_types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of the next piece kind to spawn
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

/// Draws uniformly at random from the six piece kinds
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSource for UniformSource {
    fn next_piece(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::COUNT as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Replays a fixed piece sequence, cycling when exhausted.
///
/// Makes whole games reproducible without touching the LCG.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    sequence: Vec<PieceKind>,
    next: usize,
}

impl ScriptedSource {
    /// Panics if `sequence` is empty.
    pub fn new(sequence: Vec<PieceKind>) -> Self {
        assert!(!sequence.is_empty(), "scripted piece sequence is empty");
        Self { sequence, next: 0 }
    }
}

impl PieceSource for ScriptedSource {
    fn next_piece(&mut self) -> PieceKind {
        let piece = self.sequence[self.next % self.sequence.len()];
        self.next += 1;
        piece
    }
}

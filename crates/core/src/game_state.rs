//! Game state module - the per-tick simulation loop
//!
//! Ties together board, masks, randomness, and scoring. [`GameState::step`]
//! advances the simulation exactly one tick and reports the shaped reward
//! alongside the cumulative score. Once the game-over flag is set the state
//! freezes: further steps are no-ops, but the board and piece remain
//! queryable for rendering.

use gridfall_types::{Action, PieceKind, Rotation, GAME_OVER_PENALTY, GRAVITY_INTERVAL};

use crate::board::Board;
use crate::pieces::{shape, ShapeMask, SPAWN_POSITION};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{chain_score, placement_reward};

/// The currently falling, player-controlled piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn position, unrotated
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::R0,
            x,
            y,
        }
    }

    /// Mask for the current rotation
    pub fn mask(&self) -> ShapeMask {
        shape(self.kind, self.rotation)
    }
}

/// What one simulation tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Shaped reward accumulated this tick (0 on most ticks; placement
    /// shaping plus line-clear delta at lock ticks; the terminal penalty on
    /// the game-over transition).
    pub reward: i32,
    pub game_over: bool,
    /// Cumulative line-clear score
    pub score: u32,
}

/// Complete game state
///
/// Generic over the piece source so tests can inject a scripted sequence;
/// play uses the seeded [`UniformSource`].
#[derive(Debug, Clone)]
pub struct GameState<S: PieceSource = UniformSource> {
    board: Board,
    active: ActivePiece,
    source: S,
    score: u32,
    game_over: bool,
    frame: u32,
}

impl GameState<UniformSource> {
    /// Create a game with the default uniform source at the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformSource::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a game drawing pieces from the given source
    pub fn with_source(mut source: S) -> Self {
        let active = ActivePiece::new(source.next_piece());
        Self {
            board: Board::new(),
            active,
            source,
            score: 0,
            game_over: false,
            frame: 0,
        }
    }

    /// Reinitialize: empty board, zeroed score and frame counter, cleared
    /// game-over flag, and a fresh first piece from the source.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.frame = 0;
        self.game_over = false;
        self.spawn_piece();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Overwrite the active piece with a fresh draw at the spawn position.
    /// No collision check here; callers re-test for game over.
    fn spawn_piece(&mut self) {
        self.active = ActivePiece::new(self.source.next_piece());
    }

    /// Advance the simulation one tick.
    ///
    /// Order within a tick: gravity (every [`GRAVITY_INTERVAL`]th frame,
    /// locking when blocked), then the rotation request, then the horizontal
    /// move. The rotate flag is consumed in place whether or not the
    /// rotation applied.
    pub fn step(&mut self, action: &mut Action) -> StepOutcome {
        if self.game_over {
            return StepOutcome {
                reward: 0,
                game_over: true,
                score: self.score,
            };
        }

        let mut reward = 0;
        self.frame = self.frame.wrapping_add(1);

        if self.frame % GRAVITY_INTERVAL == 0 {
            reward += self.apply_gravity();
        }

        if action.rotate {
            self.try_rotate();
            action.rotate = false;
        }

        if !self.game_over {
            self.apply_move(*action);
        } else {
            // Terminal transition happened this tick; the state is frozen now.
            reward -= GAME_OVER_PENALTY;
        }

        StepOutcome {
            reward,
            game_over: self.game_over,
            score: self.score,
        }
    }

    /// One gravity step: descend if clear, otherwise lock and hand over to a
    /// fresh piece. Returns the reward delta (non-zero only when locking).
    fn apply_gravity(&mut self) -> i32 {
        let mask = self.active.mask();
        if !self.board.collides(&mask, self.active.x, self.active.y + 1) {
            self.active.y += 1;
            return 0;
        }

        self.board
            .place(&mask, self.active.x, self.active.y, self.active.kind);
        let mut reward = placement_reward(self.board.highest_occupied_row(), self.active.y);

        let chain = self.board.clear_full_rows().len();
        let line_score = chain_score(chain);
        self.score += line_score;
        reward += line_score as i32;

        self.spawn_piece();
        let spawn_mask = self.active.mask();
        self.game_over = self
            .board
            .collides(&spawn_mask, self.active.x, self.active.y);

        reward
    }

    /// Attempt the pending clockwise rotation at the same (x, y).
    /// A blocked rotation is simply dropped; there is no kick search.
    fn try_rotate(&mut self) {
        let next = self.active.rotation.rotate_cw();
        let mask = shape(self.active.kind, next);
        if !self.board.collides(&mask, self.active.x, self.active.y) {
            self.active.rotation = next;
        }
    }

    /// Horizontal shift for this tick. Left wins when both flags are held;
    /// a blocked left does not fall back to right.
    fn apply_move(&mut self, action: Action) {
        let mask = self.active.mask();
        if action.left {
            if !self.board.collides(&mask, self.active.x - 1, self.active.y) {
                self.active.x -= 1;
            }
        } else if action.right && !self.board.collides(&mask, self.active.x + 1, self.active.y) {
            self.active.x += 1;
        }
    }
}

impl Default for GameState<UniformSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

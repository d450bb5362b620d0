//! GameView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use gridfall_core::rng::PieceSource;
use gridfall_core::GameState;
use gridfall_types::{PieceKind, BOARD_COLS, BOARD_ROWS, CELL_COLS, CELL_ROWS};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Default text color (warm off-white).
pub const TEXT: Rgb = Rgb::new(233, 216, 166);
/// Deep navy playfield background.
pub const BACKGROUND: Rgb = Rgb::new(0, 18, 25);

/// Block color for each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::O => Rgb::new(238, 155, 0),
        PieceKind::I => Rgb::new(10, 147, 150),
        PieceKind::L => Rgb::new(175, 32, 18),
        PieceKind::J => Rgb::new(202, 103, 2),
        PieceKind::S => Rgb::new(82, 183, 136),
        PieceKind::Z => Rgb::new(255, 77, 109),
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board, the falling piece, and the score into a framebuffer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: CELL_COLS,
            cell_h: CELL_ROWS,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a framebuffer.
    pub fn render<S: PieceSource>(&self, state: &GameState<S>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_w = (BOARD_COLS as u16) * self.cell_w;
        let board_h = (BOARD_ROWS as u16) * self.cell_h;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(120, 130, 140),
            ..Default::default()
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..BOARD_ROWS as i8 {
            for x in 0..BOARD_COLS as i8 {
                if let Some(Some(kind)) = state.board().get(x, y) {
                    self.draw_block(&mut fb, start_x, start_y, x as u16, y as u16, kind);
                }
            }
        }

        // Active piece.
        let active = state.active();
        for (dx, dy) in active.mask() {
            let x = active.x + dx;
            let y = active.y + dy;
            if x >= 0 && x < BOARD_COLS as i8 && y >= 0 && y < BOARD_ROWS as i8 {
                self.draw_block(&mut fb, start_x, start_y, x as u16, y as u16, active.kind);
            }
        }

        self.draw_side_panel(&mut fb, state.score(), viewport, start_x, start_y, frame_w);

        if state.game_over() {
            self.draw_game_over(&mut fb, state.score(), start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Draw one grid cell as a cell-scaled colored block.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: piece_color(kind),
            bg: BACKGROUND,
            bold: true,
        };
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        score: u32,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..Default::default()
        };
        fb.put_str(panel_x, start_y, "SCORE", label);
        fb.put_str(
            panel_x,
            start_y.saturating_add(1),
            &format!("{}", score),
            Default::default(),
        );
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        score: u32,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: BACKGROUND,
            bold: true,
        };
        let lines = [
            "GAME OVER".to_string(),
            format!("Score: {}", score),
            "R restart / Q quit".to_string(),
        ];
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(i as u16), line, style);
        }
    }
}

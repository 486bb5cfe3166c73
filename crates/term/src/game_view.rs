//! GameView: maps a [`Game`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout uses board coordinates directly: column 0 is the left frame,
//! column `width + 1` the right frame, row `height + 1` the floor. Row 0 has
//! no frame so pieces spawn flush with the top edge.

use crate::core::Game;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, ShapeKind, BORDER_CHAR, BRICK_CHAR};

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

/// Renders the board frame, settled bricks, the falling piece and a status line.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Terminal size of the framed board (without the status line).
    ///
    /// Saturates at `u16::MAX`; anything past the viewport is clipped.
    pub fn frame_size(&self, game: &Game) -> (u16, u16) {
        let board = game.board();
        let cols = framed_len(board.width());
        let rows = framed_len(board.height());
        (cols.saturating_mul(self.cell_w), rows)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size(game);
        let origin = (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2,
        );

        self.draw_frame(fb, game, origin);

        for (c, kind) in game.settled_cells() {
            self.draw_brick(fb, origin, c, shape_style(kind));
        }

        let falling = shape_style(game.current().kind()).bold();
        for c in game.current_cells() {
            self.draw_brick(fb, origin, c, falling);
        }

        let status = CellStyle::fg(Rgb::new(160, 160, 160));
        let line = format!("rows {}", game.rows_cleared());
        fb.put_str(origin.0, origin.1.saturating_add(frame_h), &line, status);

        if game.is_over() {
            let text = "GAME OVER";
            let x = origin.0.saturating_add(frame_w.saturating_sub(text.len() as u16) / 2);
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
            fb.put_str(x, origin.1.saturating_add(frame_h / 2), text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, game: &Game, origin: (u16, u16)) {
        let board = game.board();
        let style = CellStyle::fg(Rgb::new(200, 200, 200));
        let right = board.width() + 1;
        let floor = board.height() + 1;

        for y in 1..=floor {
            self.fill_cell(fb, origin, Coord::new(0, y), BORDER_CHAR, style);
            self.fill_cell(fb, origin, Coord::new(right, y), BORDER_CHAR, style);
        }
        for x in 1..right {
            self.fill_cell(fb, origin, Coord::new(x, floor), BORDER_CHAR, style);
        }
    }

    fn draw_brick(&self, fb: &mut FrameBuffer, origin: (u16, u16), c: Coord, style: CellStyle) {
        self.fill_cell(fb, origin, c, BRICK_CHAR, style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        c: Coord,
        ch: char,
        style: CellStyle,
    ) {
        let (Ok(x), Ok(y)) = (u16::try_from(c.x), u16::try_from(c.y)) else {
            return;
        };
        let px = origin.0.saturating_add(x.saturating_mul(self.cell_w));
        let py = origin.1.saturating_add(y);
        for dx in 0..self.cell_w {
            let Some(cx) = px.checked_add(dx).filter(|&cx| cx < fb.width()) else {
                break;
            };
            fb.put_char(cx, py, ch, style);
        }
    }
}

/// Board extent plus both frame cells, in terminal cells
fn framed_len(dim: i32) -> u16 {
    u16::try_from(dim.saturating_add(2)).unwrap_or(u16::MAX)
}

fn shape_style(kind: ShapeKind) -> CellStyle {
    let fg = match kind {
        ShapeKind::I => Rgb::new(80, 220, 220),
        ShapeKind::L => Rgb::new(255, 165, 0),
        ShapeKind::J => Rgb::new(80, 120, 220),
        ShapeKind::Z => Rgb::new(220, 80, 80),
        ShapeKind::O => Rgb::new(240, 220, 80),
    };
    CellStyle::fg(fg)
}

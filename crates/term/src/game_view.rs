//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameStatus, Point};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the tile grid.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a centred "2048" with a margin and keeps tiles roughly square.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered grid for a board of `cols x rows` tiles.
    pub fn frame_size(&self, cols: usize, rows: usize) -> (u16, u16) {
        let w = (cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board = &snap.board;
        let (frame_w, frame_h) = self.frame_size(board.width(), board.height());

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for point in board.points() {
            let value = board.get(point).unwrap_or(0);
            self.draw_tile(fb, start_x, start_y, point, value);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            GameStatus::Playing => {}
            GameStatus::Won => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!")
            }
            GameStatus::Lost => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER")
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.put_char(x, y, '╭', style);
        fb.put_char(right, y, '╮', style);
        fb.put_char(x, bottom, '╰', style);
        fb.put_char(right, bottom, '╯', style);
        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, bottom, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(right, y + 1, 1, h - 2, '│', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, point: Point, value: Cell) {
        let px = start_x
            .saturating_add(1)
            .saturating_add((point.col as u16).saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add((point.row as u16).saturating_mul(self.cell_h));
        let style = tile_style(value);
        let mid_y = py.saturating_add(self.cell_h / 2);

        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        if value == 0 {
            fb.put_str_centered(px, mid_y, self.cell_w, "·", style);
        } else {
            fb.put_str_centered(px, mid_y, self.cell_w, &value.to_string(), style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        for (name, number) in [
            ("TARGET", snap.target),
            ("BEST", snap.best_tile()),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        for line in ["arrows/hjkl/wasd", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let banner = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str_centered(start_x, mid_y, frame_w, text, banner);
        let hint = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG).dim();
        fb.put_str_centered(
            start_x,
            mid_y.saturating_add(1),
            frame_w,
            "press any key",
            hint,
        );
    }
}

/// Colours for a tile value; the palette steps by powers of two.
pub fn tile_style(value: Cell) -> CellStyle {
    let (fg, bg) = match value {
        0 => (Rgb::new(90, 90, 100), PLAY_BG),
        2 => (Rgb::new(119, 110, 101), Rgb::new(238, 228, 218)),
        4 => (Rgb::new(119, 110, 101), Rgb::new(237, 224, 200)),
        8 => (Rgb::new(249, 246, 242), Rgb::new(242, 177, 121)),
        16 => (Rgb::new(249, 246, 242), Rgb::new(245, 149, 99)),
        32 => (Rgb::new(249, 246, 242), Rgb::new(246, 124, 95)),
        64 => (Rgb::new(249, 246, 242), Rgb::new(246, 94, 59)),
        128 => (Rgb::new(249, 246, 242), Rgb::new(237, 207, 114)),
        256 => (Rgb::new(249, 246, 242), Rgb::new(237, 204, 97)),
        512 => (Rgb::new(249, 246, 242), Rgb::new(237, 200, 80)),
        1024 => (Rgb::new(249, 246, 242), Rgb::new(237, 197, 63)),
        2048 => (Rgb::new(249, 246, 242), Rgb::new(237, 194, 46)),
        _ => (Rgb::new(249, 246, 242), Rgb::new(60, 58, 50)),
    };
    let style = CellStyle::new(fg, bg);
    if value == 0 {
        style.dim()
    } else {
        style.bold()
    }
}

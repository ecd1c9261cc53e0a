//! GameView: maps the controller state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::column::render_columns;
use crate::core::Controller;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::palette::ShadePalette;
use crate::types::{Shade, Vec2i};

/// Glyph marking the player on the map panel.
pub const PLAYER_GLYPH: char = '@';

/// Glyph marking the facing direction on the map panel.
pub const HEADING_GLYPH: char = '+';

/// Distance (map cells) from the player to the heading marker.
const HEADING_REACH: f32 = 1.5;

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

/// First-person view plus the map panel and status line overlays.
pub struct GameView {
    palette: ShadePalette,
    /// Screen (row, column) of map cell (0, 0).
    panel_origin: Vec2i,
    show_map: bool,
    /// Screen (row, column) of the status line.
    status_origin: Vec2i,
    show_status: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(ShadePalette::default())
    }
}

impl GameView {
    pub fn new(palette: ShadePalette) -> Self {
        Self {
            palette,
            panel_origin: Vec2i::new(1, 1),
            show_map: true,
            status_origin: Vec2i::new(2, 25),
            show_status: true,
        }
    }

    pub fn with_map(mut self, show: bool) -> Self {
        self.show_map = show;
        self
    }

    pub fn with_status(mut self, show: bool) -> Self {
        self.show_status = show;
        self
    }

    pub fn palette(&self) -> &ShadePalette {
        &self.palette
    }

    pub fn panel_origin(&self) -> Vec2i {
        self.panel_origin
    }

    /// Render the controller's last cast into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers cast for `viewport.width`
    /// first (see [`GameView::render`]) and reuse one framebuffer across frames.
    pub fn render_into(&self, ctl: &Controller, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        render_columns(fb, &self.palette, ctl.samples());

        if self.show_map {
            self.draw_map_panel(fb, ctl);
            self.draw_player_markers(fb, ctl);
        }
        if self.show_status {
            self.draw_status(fb, viewport);
        }
    }

    /// Cast for the viewport width and render into a new framebuffer.
    pub fn render(&self, ctl: &mut Controller, viewport: Viewport) -> FrameBuffer {
        ctl.cast(viewport.width as usize);
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(ctl, viewport, &mut fb);
        fb
    }

    fn draw_map_panel(&self, fb: &mut FrameBuffer, ctl: &Controller) {
        let grid = ctl.grid();
        for x in 0..grid.rows() {
            for (y, cell) in grid.row(x).enumerate() {
                fb.put_glyph(
                    self.panel_origin.x + x as i32,
                    self.panel_origin.y + y as i32,
                    cell.as_char(),
                    Shade::DEFAULT,
                    false,
                );
            }
        }
    }

    fn draw_player_markers(&self, fb: &mut FrameBuffer, ctl: &Controller) {
        let player = ctl.player();
        let at = self.panel_origin + player.position().trunc();
        // Offset is truncated on its own, then added to the player's cell.
        let heading = at + player.direction().scale(HEADING_REACH).trunc();

        fb.put_glyph(at.x, at.y, PLAYER_GLYPH, Shade::DEFAULT, false);
        fb.put_glyph(heading.x, heading.y, HEADING_GLYPH, Shade::DEFAULT, false);
    }

    fn draw_status(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let (Ok(x), Ok(y)) = (
            u16::try_from(self.status_origin.y),
            u16::try_from(self.status_origin.x),
        ) else {
            return;
        };
        let style = CellStyle::default();
        let label = "size distanceMap: ";
        fb.put_str(x, y, label, style);
        let cx = x.saturating_add(label.len() as u16);
        let cx = fb.put_u32(cx, y, viewport.width as u32, style);
        fb.put_char(cx, y, 'x', style);
        fb.put_u32(cx.saturating_add(1), y, viewport.height as u32, style);
    }
}

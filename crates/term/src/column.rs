//! Column renderer: turns per-column samples into ceiling/wall/floor strips.
//!
//! Pure apart from the framebuffer it writes. Every cell of each rendered column
//! is written exactly once.

use crate::fb::FrameBuffer;
use crate::palette::ShadePalette;
use crate::types::{ColumnSample, Shade};

/// Glyph for wall cells where the ray grazes a corner.
pub const CORNER_GLYPH: char = '▒';

/// Vertical extent of the wall for a sample at `distance` on a screen `height` rows tall.
///
/// Returns `(top, bottom)`: rows strictly between them are wall, rows at or below
/// `bottom` are floor. `top = h/2 - h·10/distance` (truncated); a zero distance is
/// treated as infinitely far, which gives `top = h/2`. `bottom = h - top`, raised
/// to at least `h/2`.
pub fn wall_span(distance: u32, height: u16) -> (i32, i32) {
    let h = height as i32;
    let half = h / 2;
    let top = if distance == 0 {
        half
    } else {
        (half as f32 - h as f32 * 10.0 / distance as f32) as i32
    };
    let bottom = (h - top).max(half);
    (top, bottom)
}

/// Apparent distance of the floor at `row`, given the wall `bottom`.
///
/// `distance · (h - row) / (h - bottom)` in integer arithmetic, with the
/// denominator held at 1 or more.
pub fn floor_distance(distance: u32, row: i32, height: u16, bottom: i32) -> i32 {
    let h = height as i32;
    let denom = (h - bottom).max(1);
    (distance as i64 * (h - row) as i64 / denom as i64) as i32
}

/// Floor glyph by distance threshold.
pub fn floor_glyph(floor_distance: i32) -> char {
    if floor_distance > 90 {
        ' '
    } else if floor_distance > 75 {
        '.'
    } else if floor_distance > 50 {
        '-'
    } else if floor_distance > 20 {
        '='
    } else {
        '#'
    }
}

/// Shade slot for a non-corner wall cell.
pub fn wall_shade(palette: &ShadePalette, distance: u32) -> Shade {
    palette.slot(distance.min(i32::MAX as u32) as i32)
}

/// Render one column at screen column `x`.
pub fn render_column(
    fb: &mut FrameBuffer,
    palette: &ShadePalette,
    x: u16,
    sample: ColumnSample,
) {
    let height = fb.height();
    let (top, bottom) = wall_span(sample.distance, height);
    let column = x as i32;

    for row in 0..height as i32 {
        if row > top && row < bottom {
            if sample.is_corner {
                fb.put_glyph(row, column, CORNER_GLYPH, palette.darkest(), false);
            } else {
                fb.put_glyph(row, column, ' ', wall_shade(palette, sample.distance), false);
            }
        } else if row >= bottom {
            let fd = floor_distance(sample.distance, row, height, bottom);
            fb.put_glyph(row, column, floor_glyph(fd), palette.slot(fd), true);
        } else {
            fb.put_glyph(row, column, ' ', Shade::DEFAULT, false);
        }
    }
}

/// Render samples left to right starting at column 0. Samples beyond the
/// framebuffer width are ignored.
pub fn render_columns(fb: &mut FrameBuffer, palette: &ShadePalette, samples: &[ColumnSample]) {
    let width = fb.width() as usize;
    for (x, sample) in samples.iter().take(width).enumerate() {
        render_column(fb, palette, x as u16, *sample);
    }
}

//! Column rendering against known samples.
//!
//! A 1-column framebuffer, 40 rows tall, keeps the expected rows easy to read:
//! `top = 20 - 400/d`, `bottom = 40 - top`.

use termcaster::term::{
    render_column, render_columns, CellStyle, FrameBuffer, ShadePalette, CORNER_GLYPH,
};
use termcaster::types::{ColumnSample, Shade};

const HEIGHT: u16 = 40;

fn column(sample: ColumnSample) -> (FrameBuffer, ShadePalette) {
    let palette = ShadePalette::default();
    let mut fb = FrameBuffer::new(1, HEIGHT);
    render_column(&mut fb, &palette, 0, sample);
    (fb, palette)
}

fn at(fb: &FrameBuffer, row: u16) -> (char, CellStyle) {
    let cell = fb.get(0, row).unwrap();
    (cell.ch, cell.style)
}

#[test]
fn wall_at_forty_steps() {
    let (fb, palette) = column(ColumnSample::hit(40, false));

    // Ceiling: rows 0..=10 (top = 10 is not wall).
    for row in 0..=10 {
        assert_eq!(at(&fb, row), (' ', CellStyle::default()), "row {row}");
    }
    // Wall: rows strictly between 10 and 30.
    for row in 11..=29 {
        assert_eq!(
            at(&fb, row),
            (' ', CellStyle::new(palette.slot(40), false)),
            "row {row}"
        );
    }
    // Floor from the bottom row down, drawn reversed.
    for row in 30..HEIGHT {
        let (_, style) = at(&fb, row);
        assert!(style.reverse, "row {row}");
        assert!(palette.level_of(style.shade).is_some());
    }
    assert_eq!(at(&fb, 30).0, '=');
    assert_eq!(at(&fb, 30).1.shade, palette.slot(40));
    assert_eq!(at(&fb, 35).0, '#');
    assert_eq!(at(&fb, 39).0, '#');
    assert_eq!(at(&fb, 39).1.shade, palette.slot(4));
}

#[test]
fn corner_draws_corner_glyph_in_darkest_shade() {
    let (fb, palette) = column(ColumnSample::hit(40, true));
    for row in 11..=29 {
        assert_eq!(
            at(&fb, row),
            (CORNER_GLYPH, CellStyle::new(palette.darkest(), false))
        );
    }
    // Ceiling and floor are unaffected by the corner flag.
    assert_eq!(at(&fb, 5).0, ' ');
    assert_eq!(at(&fb, 30).0, '=');
}

#[test]
fn miss_renders_thin_band_and_distant_floor() {
    let (fb, palette) = column(ColumnSample::MISS);

    // top = 16, bottom = 24.
    assert_eq!(at(&fb, 16).1, CellStyle::default());
    assert_eq!(at(&fb, 17).1.shade, palette.darkest());
    assert_eq!(at(&fb, 23).1.shade, palette.darkest());

    // Floor distance 100·(40 - row)/16.
    assert_eq!(at(&fb, 24).0, ' ');
    assert_eq!(at(&fb, 27).0, '.');
    assert_eq!(at(&fb, 28).0, '-');
    assert_eq!(at(&fb, 30).0, '-');
    assert_eq!(at(&fb, 32).0, '=');
    assert_eq!(at(&fb, 37).0, '#');
}

#[test]
fn zero_distance_has_no_wall_band() {
    let (fb, palette) = column(ColumnSample::hit(0, false));
    for row in 0..20 {
        assert_eq!(at(&fb, row), (' ', CellStyle::default()));
    }
    for row in 20..HEIGHT {
        assert_eq!(
            at(&fb, row),
            ('#', CellStyle::new(palette.slot(0), true)),
            "row {row}"
        );
    }
}

#[test]
fn nearer_walls_are_never_darker() {
    let mut previous = 0u8;
    for d in 1..=100 {
        let (fb, palette) = column(ColumnSample::hit(d, false));
        let level = palette.level_of(at(&fb, HEIGHT / 2).1.shade).unwrap();
        assert!(level >= previous, "d = {d}");
        previous = level;
    }
    assert_eq!(previous, 100);
}

#[test]
fn nearer_walls_are_taller() {
    let wall_rows = |d: u32| {
        let (fb, palette) = column(ColumnSample::hit(d, false));
        (0..HEIGHT)
            .filter(|&row| {
                let (ch, style) = at(&fb, row);
                ch == ' ' && !style.reverse && palette.level_of(style.shade).is_some()
            })
            .count()
    };
    let mut previous = usize::MAX;
    for d in [10, 20, 40, 60, 100] {
        let rows = wall_rows(d);
        assert!(rows <= previous, "d = {d}");
        previous = rows;
    }
}

#[test]
fn every_cell_of_a_column_is_written() {
    let palette = ShadePalette::default();
    let mut fb = FrameBuffer::new(1, HEIGHT);
    fb.clear(termcaster::term::Cell {
        ch: '?',
        style: CellStyle::new(Shade(7), false),
    });
    render_column(&mut fb, &palette, 0, ColumnSample::hit(25, false));
    assert!(fb.cells().iter().all(|c| c.ch != '?'));
}

#[test]
fn render_columns_clips_to_width() {
    let palette = ShadePalette::default();

    let mut wide = FrameBuffer::new(5, 10);
    render_columns(&mut wide, &palette, &[ColumnSample::hit(10, false); 3]);
    // Columns without a sample are left as they were.
    assert_eq!(wide.get(4, 5).unwrap().style, CellStyle::default());
    assert_ne!(wide.get(2, 5).unwrap().style, CellStyle::default());

    let mut narrow = FrameBuffer::new(2, 10);
    render_columns(&mut narrow, &palette, &[ColumnSample::hit(10, false); 8]);
    assert_eq!(narrow.get(1, 5).unwrap().style, narrow.get(0, 5).unwrap().style);
}

//! Terminal "game renderer" module.
//!
//! A small rendering layer for the first-person view. It renders into a plain
//! framebuffer that is flushed to a terminal backend, without any widget or
//! layout library.
//!
//! Pipeline per frame:
//! - [`column`] turns the controller's column samples into ceiling/wall/floor strips
//! - [`game_view`] overlays the map panel, player markers and the status line
//! - [`renderer`] resolves palette slots to colors and writes the changed cells
//!
//! Everything except [`renderer`] is pure and unit-testable.

pub mod column;
pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use termcaster_core as core;
pub use termcaster_types as types;

pub use column::{floor_distance, floor_glyph, render_column, render_columns, wall_span, CORNER_GLYPH};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, HEADING_GLYPH, PLAYER_GLYPH};
pub use palette::ShadePalette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

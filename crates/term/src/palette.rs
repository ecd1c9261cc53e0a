//! Shade palette: distance levels to palette slots to gray colors.
//!
//! The palette is built once at startup and handed to both the column renderer
//! (which picks slots) and the terminal renderer (which turns slots into colors).
//! Level `i` has intensity `1000 - 10·i` on a 0..=1000 scale, so level 0 is full
//! white and `MAX_SHADE` is black.

use crate::fb::{CellStyle, Rgb};
use crate::types::{Shade, MAX_SHADE, PALETTE_BASE, SHADE_LEVELS};

/// Foreground used for cells with the default slot.
const DEFAULT_FG: Rgb = Rgb::new(220, 220, 220);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadePalette {
    base: u8,
    levels: [Rgb; SHADE_LEVELS],
}

impl Default for ShadePalette {
    fn default() -> Self {
        Self::new(PALETTE_BASE)
    }
}

impl ShadePalette {
    /// Linear gray ramp with shade slots starting at `base`.
    ///
    /// `base` is clamped so that every level fits in a `u8` slot and slot 0 stays
    /// reserved for the default style.
    pub fn new(base: u8) -> Self {
        let max_base = (u8::MAX as usize + 1 - SHADE_LEVELS) as u8;
        let base = base.clamp(1, max_base);
        let mut levels = [Rgb::BLACK; SHADE_LEVELS];
        for (i, rgb) in levels.iter_mut().enumerate() {
            let v = (Self::intensity(i as u8) as u32 * 255 / 1000) as u8;
            *rgb = Rgb::gray(v);
        }
        Self { base, levels }
    }

    /// Level intensity on the 0..=1000 scale.
    pub fn intensity(level: u8) -> u16 {
        1000 - (level.min(MAX_SHADE) as u16) * 10
    }

    pub fn base(&self) -> u8 {
        self.base
    }

    /// Slot for a distance-like level, clamped into `0..=MAX_SHADE`.
    pub fn slot(&self, level: i32) -> Shade {
        let clamped = level.clamp(0, MAX_SHADE as i32) as u8;
        Shade(self.base + clamped)
    }

    /// The darkest slot.
    pub fn darkest(&self) -> Shade {
        self.slot(MAX_SHADE as i32)
    }

    /// Shade level for a slot, or `None` for the default and reserved slots.
    pub fn level_of(&self, shade: Shade) -> Option<u8> {
        let level = shade.0.checked_sub(self.base)?;
        (level <= MAX_SHADE).then_some(level)
    }

    /// Color of a shade level.
    pub fn color(&self, level: u8) -> Rgb {
        self.levels[level.min(MAX_SHADE) as usize]
    }

    /// Concrete `(fg, bg)` for a cell style.
    ///
    /// Shade slots draw black on the level's gray; default and reserved slots
    /// draw light gray on black. Reverse video swaps the pair.
    pub fn resolve(&self, style: CellStyle) -> (Rgb, Rgb) {
        let (fg, bg) = match self.level_of(style.shade) {
            Some(level) => (Rgb::BLACK, self.color(level)),
            None => (DEFAULT_FG, Rgb::BLACK),
        };
        if style.reverse {
            (bg, fg)
        } else {
            (fg, bg)
        }
    }
}

//! Core types module - shared data structures and constants
//!
//! This crate defines the value types and tuning constants used throughout the
//! workspace. Everything here is pure data with no external dependencies, so it
//! can be used by the caster, the renderer and the input layer alike.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DISTANCE_STEP` | 0.15 | World units advanced per integer ray step |
//! | `MAX_DISTANCE` | 100 | Ray steps before a ray counts as a miss |
//! | `CORNER_VIEW_ANGLE` | 0.0075 | Angle (rad) under which a ray "grazes" a corner |
//! | `PLAYER_STEP` | 0.25 | World units per move command |
//! | `TURN_STEP_DEG` | 10 | Degrees per turn command |
//! | `DEFAULT_FOV_DEG` | 45 | Horizontal field of view |
//!
//! The ray-fan, depth-scale and wall-height formulas built on these constants are
//! empirical and reproduced exactly; they are not a true perspective projection.
//!
//! # Shading
//!
//! Shade levels run from 0 (brightest, closest) to `MAX_SHADE` (darkest, farthest).
//! A level is addressed on the canvas through a [`Shade`] slot, `PALETTE_BASE + level`
//! by default. Slots below the base are reserved; slot 0 is the terminal default style.
//!
//! # Examples
//!
//! ```
//! use termcaster_types::{Cell, Command, Vec2f};
//!
//! let dir = Vec2f::new(1.0, 1.0).normalize();
//! assert!((dir.length() - 1.0).abs() < 1e-6);
//!
//! assert_eq!(Command::from_str("turnLeft"), Some(Command::TurnLeft));
//!
//! assert!(Cell::from_char('#').is_wall());
//! ```

pub mod vec2;

pub use vec2::{Vec2f, Vec2i};

/// World units advanced along a ray per integer distance step.
pub const DISTANCE_STEP: f32 = 0.15;

/// Number of ray steps before a ray is reported as a miss.
pub const MAX_DISTANCE: u32 = 100;

/// Angular threshold (radians) for flagging a hit as a corner.
pub const CORNER_VIEW_ANGLE: f32 = 0.0075;

/// World units moved per MoveForward/MoveBackward.
pub const PLAYER_STEP: f32 = 0.25;

/// Degrees turned per TurnLeft/TurnRight.
pub const TURN_STEP_DEG: f32 = 10.0;

/// Default horizontal field of view in degrees (π/4).
pub const DEFAULT_FOV_DEG: f32 = 45.0;

/// Darkest shade level. Levels are `0..=MAX_SHADE`.
pub const MAX_SHADE: u8 = 100;

/// Number of shade levels in the palette.
pub const SHADE_LEVELS: usize = MAX_SHADE as usize + 1;

/// First palette slot used by shade levels; lower slots are reserved.
pub const PALETTE_BASE: u8 = 50;

/// Character marking a wall cell in map text.
pub const WALL_CHAR: char = '#';

/// Character used for open cells when a grid is printed back.
pub const OPEN_CHAR: char = '.';

/// Turn increment in radians.
pub fn turn_step() -> f32 {
    TURN_STEP_DEG.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuning_defaults() {
        assert_eq!(DISTANCE_STEP, 0.15);
        assert_eq!(MAX_DISTANCE, 100);
        assert_eq!(CORNER_VIEW_ANGLE, 0.0075);
        assert_eq!(PLAYER_STEP, 0.25);
        assert_eq!(SHADE_LEVELS, 101);
        assert!((turn_step() - std::f32::consts::PI / 18.0).abs() < 1e-6);
    }

    #[test]
    fn palette_slots_fit_in_u8() {
        assert!(PALETTE_BASE as usize + SHADE_LEVELS <= u8::MAX as usize + 1);
    }
}

/// Discrete player command read from the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    Quit,
    NoOp,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive).
    ///
    /// ```
    /// use termcaster_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveForward"), Some(Command::MoveForward));
    /// assert_eq!(Command::from_str("QUIT"), Some(Command::Quit));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveforward" => Some(Command::MoveForward),
            "movebackward" => Some(Command::MoveBackward),
            "turnleft" => Some(Command::TurnLeft),
            "turnright" => Some(Command::TurnRight),
            "quit" => Some(Command::Quit),
            "noop" => Some(Command::NoOp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveForward => "moveForward",
            Command::MoveBackward => "moveBackward",
            Command::TurnLeft => "turnLeft",
            Command::TurnRight => "turnRight",
            Command::Quit => "quit",
            Command::NoOp => "noOp",
        }
    }
}

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Wall,
    #[default]
    Open,
}

impl Cell {
    /// `#` is a wall; every other character is open.
    pub fn from_char(ch: char) -> Self {
        if ch == WALL_CHAR {
            Cell::Wall
        } else {
            Cell::Open
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Wall => WALL_CHAR,
            Cell::Open => OPEN_CHAR,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// Per-column ray result.
///
/// `distance` is the integer step count in `0..=MAX_DISTANCE`. `is_corner` is only
/// ever set on an actual hit, so it implies `distance < MAX_DISTANCE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnSample {
    pub distance: u32,
    pub is_corner: bool,
}

impl ColumnSample {
    pub const MISS: ColumnSample = ColumnSample {
        distance: MAX_DISTANCE,
        is_corner: false,
    };

    pub fn hit(distance: u32, is_corner: bool) -> Self {
        Self {
            distance,
            is_corner,
        }
    }

    pub fn is_miss(&self) -> bool {
        self.distance >= MAX_DISTANCE
    }
}

/// Palette slot attached to a canvas cell.
///
/// Slot 0 is the terminal default style. Shade levels occupy the slots from a
/// palette base upward; the slots below the base are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shade(pub u8);

impl Shade {
    pub const DEFAULT: Shade = Shade(0);
}

#[cfg(test)]
mod cell_tests {
    use super::*;

    #[test]
    fn default_shade_is_slot_zero() {
        assert_eq!(Shade::default(), Shade::DEFAULT);
        assert_eq!(Shade::DEFAULT.0, 0);
    }

    #[test]
    fn cell_from_char() {
        assert_eq!(Cell::from_char('#'), Cell::Wall);
        assert_eq!(Cell::from_char('.'), Cell::Open);
        assert_eq!(Cell::from_char(' '), Cell::Open);
        assert_eq!(Cell::from_char('x'), Cell::Open);
    }
}

//! Core raycasting logic - pure, deterministic, and testable
//!
//! This crate holds the map, the ray caster and the player movement rules.
//! It has no dependencies on the terminal or on input handling, which makes it:
//!
//! - **Deterministic**: the same map, position, direction and field of view always
//!   produce the same column samples
//! - **Testable**: every rule is exercised without a live terminal
//! - **Portable**: the samples can feed any column renderer
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size wall/open tile map with bounds-checked access
//! - [`caster`]: per-column ray marching with corner detection
//! - [`player`]: position/direction and the all-or-nothing movement rule
//! - [`controller`]: owns grid + player and drives one cast per frame
//!
//! # Example
//!
//! ```
//! use termcaster_core::{Controller, MoveOutcome};
//! use termcaster_types::{Command, MAX_DISTANCE};
//!
//! let mut ctl = Controller::builtin().unwrap();
//! assert_eq!(ctl.apply(Command::MoveForward), MoveOutcome::Moved);
//!
//! let samples = ctl.cast(80);
//! assert_eq!(samples.len(), 80);
//! assert!(samples.iter().all(|s| s.distance <= MAX_DISTANCE));
//! ```

pub mod caster;
pub mod controller;
pub mod grid;
pub mod player;

pub use termcaster_types as types;

pub use caster::{cast, cast_into, cast_ray, is_corner_hit, ray_direction, ray_directions};
pub use controller::Controller;
pub use grid::{Grid, MapError, BUILTIN_MAP};
pub use player::{MoveOutcome, Player};

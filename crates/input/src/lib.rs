//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` events into [`crate::types::Command`] values and provides a
//! blocking read that drives the frame loop: one command, one frame.

pub mod handler;
pub mod map;

pub use termcaster_types as types;

pub use handler::{command_for_event, read_command};
pub use map::{handle_key_event, should_quit};

//! Blocking command reader.
//!
//! The frame loop renders, then blocks here until the next command. There is no
//! timeout and no background polling.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::Command;

/// Block until the next event that should produce a frame.
///
/// Bound keys yield their command; unbound keys and terminal resizes yield
/// `NoOp` so the caller redraws. Key releases, mouse and focus events are
/// skipped.
pub fn read_command() -> Result<Command> {
    loop {
        if let Some(command) = command_for_event(event::read()?) {
            return Ok(command);
        }
    }
}

/// Translate one terminal event. `None` means "keep waiting".
pub fn command_for_event(ev: Event) -> Option<Command> {
    match ev {
        Event::Key(key) => match key.kind {
            // Auto-repeat keeps the player walking while a key is held.
            KeyEventKind::Press | KeyEventKind::Repeat => {
                Some(handle_key_event(key).unwrap_or(Command::NoOp))
            }
            KeyEventKind::Release => None,
        },
        Event::Resize(_, _) => Some(Command::NoOp),
        _ => None,
    }
}

//! Key mapping from terminal events to player commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a command. Unbound keys map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(Command::MoveForward)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(Command::MoveBackward)
        }

        // Turning
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Command::TurnLeft),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Command::TurnRight),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

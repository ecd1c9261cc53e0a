//! Player state and movement rules.
//!
//! A move is all-or-nothing: the step is applied tentatively and rolled back if
//! the destination cell is not open. There is no sliding along walls.

use crate::grid::{Grid, MapError};
use crate::types::{turn_step, Command, Vec2f, PLAYER_STEP};

/// Result of applying one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Position changed by one step.
    Moved,
    /// Destination was a wall (or off the map); position unchanged.
    Blocked,
    /// Direction changed.
    Turned,
    /// Quit requested.
    Quit,
    /// Nothing to do.
    Idle,
}

/// Player position (continuous map coordinates) and unit facing direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    position: Vec2f,
    direction: Vec2f,
}

impl Player {
    /// Start position used by the built-in map.
    pub const START_POSITION: Vec2f = Vec2f::new(1.5, 1.5);

    /// Create a player. `direction` is normalized.
    pub fn new(position: Vec2f, direction: Vec2f) -> Self {
        Self {
            position,
            direction: direction.normalize(),
        }
    }

    /// Create a player, checking that the start cell is open.
    pub fn spawn(grid: &Grid, position: Vec2f, direction: Vec2f) -> Result<Self, MapError> {
        if !grid.is_open_at(position) {
            return Err(MapError::StartBlocked {
                x: position.x,
                y: position.y,
            });
        }
        Ok(Self::new(position, direction))
    }

    /// Default spawn: `START_POSITION` facing `normalize(1, 1)`.
    pub fn spawn_default(grid: &Grid) -> Result<Self, MapError> {
        Self::spawn(grid, Self::START_POSITION, Vec2f::new(1.0, 1.0))
    }

    pub fn position(&self) -> Vec2f {
        self.position
    }

    pub fn direction(&self) -> Vec2f {
        self.direction
    }

    /// Apply a command against `grid`.
    pub fn apply(&mut self, command: Command, grid: &Grid) -> MoveOutcome {
        match command {
            Command::MoveForward => self.try_step(grid, PLAYER_STEP),
            Command::MoveBackward => self.try_step(grid, -PLAYER_STEP),
            Command::TurnLeft => self.turn(-turn_step()),
            Command::TurnRight => self.turn(turn_step()),
            Command::Quit => MoveOutcome::Quit,
            Command::NoOp => MoveOutcome::Idle,
        }
    }

    /// Move `step` units along the facing direction unless that lands in a wall.
    pub fn try_step(&mut self, grid: &Grid, step: f32) -> MoveOutcome {
        let previous = self.position;
        self.position = previous + self.direction.scale(step);

        if grid.is_open_at(self.position) {
            MoveOutcome::Moved
        } else {
            self.position = previous;
            MoveOutcome::Blocked
        }
    }

    /// Rotate the facing direction. Never blocked.
    pub fn turn(&mut self, rad: f32) -> MoveOutcome {
        self.direction = self.direction.rotate(rad);
        MoveOutcome::Turned
    }
}

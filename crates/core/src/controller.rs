//! Controller - owns the map, the player and the per-frame sample buffer.
//!
//! The grid never changes after construction; the player is the only state
//! carried from frame to frame. Column samples are recomputed from scratch on
//! every [`Controller::cast`].

use tracing::{debug, trace};

use crate::caster::cast_into;
use crate::grid::{Grid, MapError};
use crate::player::{MoveOutcome, Player};
use crate::types::{ColumnSample, Command, DEFAULT_FOV_DEG};

#[derive(Debug, Clone)]
pub struct Controller {
    grid: Grid,
    player: Player,
    /// Horizontal field of view in radians.
    fov: f32,
    samples: Vec<ColumnSample>,
}

impl Controller {
    /// Controller with the default field of view.
    pub fn new(grid: Grid, player: Player) -> Self {
        Self::with_fov(grid, player, DEFAULT_FOV_DEG.to_radians())
    }

    pub fn with_fov(grid: Grid, player: Player, fov: f32) -> Self {
        Self {
            grid,
            player,
            fov,
            samples: Vec::new(),
        }
    }

    /// Built-in map with the default spawn.
    pub fn builtin() -> Result<Self, MapError> {
        let grid = Grid::builtin();
        let player = Player::spawn_default(&grid)?;
        Ok(Self::new(grid, player))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Apply one command to the player.
    pub fn apply(&mut self, command: Command) -> MoveOutcome {
        let outcome = self.player.apply(command, &self.grid);
        match outcome {
            MoveOutcome::Blocked => {
                let p = self.player.position();
                debug!(command = command.as_str(), x = p.x, y = p.y, "move blocked");
            }
            _ => {
                let p = self.player.position();
                let d = self.player.direction();
                debug!(
                    command = command.as_str(),
                    ?outcome,
                    x = p.x,
                    y = p.y,
                    dx = d.x,
                    dy = d.y,
                    "command applied"
                );
            }
        }
        outcome
    }

    /// Cast one ray per column for the current player state.
    pub fn cast(&mut self, screen_width: usize) -> &[ColumnSample] {
        cast_into(
            screen_width,
            &self.grid,
            self.player.position(),
            self.player.direction(),
            self.fov,
            &mut self.samples,
        );
        trace!(
            width = screen_width,
            nearest = ?self.samples.iter().map(|s| s.distance).min(),
            "frame cast"
        );
        &self.samples
    }

    /// Samples from the last [`Controller::cast`].
    pub fn samples(&self) -> &[ColumnSample] {
        &self.samples
    }
}

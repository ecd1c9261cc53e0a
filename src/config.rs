//! Runtime configuration.
//!
//! Values come from environment variables with defaults, then command-line flags
//! override them. Invalid environment values fall back to the default; invalid
//! flags are errors.
//!
//! | Env | Flag | Default |
//! |-----|------|---------|
//! | `TERMCASTER_MAP` | `--map PATH` | built-in map |
//! | `TERMCASTER_FOV_DEG` | `--fov DEG` | 45 |
//! | `TERMCASTER_LOG_PATH` | `--log PATH` | logging off |
//! | `TERMCASTER_LOG` | | `info` |

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::core::{Controller, Grid, Player};
use crate::types::DEFAULT_FOV_DEG;

pub const ENV_MAP: &str = "TERMCASTER_MAP";
pub const ENV_FOV_DEG: &str = "TERMCASTER_FOV_DEG";
pub const ENV_LOG_PATH: &str = "TERMCASTER_LOG_PATH";
pub const ENV_LOG: &str = "TERMCASTER_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Map file; `None` uses the built-in map.
    pub map_path: Option<PathBuf>,
    /// Horizontal field of view in degrees, `0 < fov < 180`.
    pub fov_deg: f32,
    /// Log file; `None` disables logging.
    pub log_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map_path: None,
            fov_deg: DEFAULT_FOV_DEG,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Environment, then `args` (without the program name).
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_env().apply_args(args)
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let fov_deg = non_empty(ENV_FOV_DEG)
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|v| valid_fov(*v))
            .unwrap_or(DEFAULT_FOV_DEG);

        Self {
            map_path: non_empty(ENV_MAP).map(PathBuf::from),
            fov_deg,
            log_path: non_empty(ENV_LOG_PATH).map(PathBuf::from),
            log_filter: non_empty(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Apply command-line flags on top of `self`.
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--map" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --map"))?;
                    self.map_path = Some(PathBuf::from(v));
                }
                "--fov" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --fov"))?;
                    let fov = v
                        .parse::<f32>()
                        .map_err(|_| anyhow!("invalid --fov value: {}", v))?;
                    if !valid_fov(fov) {
                        return Err(anyhow!("--fov must be between 0 and 180 degrees, got {}", v));
                    }
                    self.fov_deg = fov;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(PathBuf::from(v));
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn fov_radians(&self) -> f32 {
        self.fov_deg.to_radians()
    }

    /// Load the map and spawn the player at the default start.
    pub fn build_controller(&self) -> Result<Controller> {
        let grid = match &self.map_path {
            Some(path) => Grid::load(path)
                .with_context(|| format!("loading map {}", path.display()))?,
            None => Grid::builtin(),
        };
        let player = Player::spawn_default(&grid)?;
        Ok(Controller::with_fov(grid, player, self.fov_radians()))
    }
}

fn valid_fov(deg: f32) -> bool {
    deg.is_finite() && deg > 0.0 && deg < 180.0
}

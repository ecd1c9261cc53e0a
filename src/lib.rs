//! termcaster (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the process-level
//! pieces the binary needs: configuration and logging setup.

pub mod config;
pub mod logging;

pub use termcaster_core as core;
pub use termcaster_input as input;
pub use termcaster_term as term;
pub use termcaster_types as types;

pub use config::Config;

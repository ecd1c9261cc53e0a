//! Terminal raycaster (default binary).
//!
//! Renders the first-person view with crossterm and a framebuffer-based
//! renderer, then blocks for the next key. One command, one frame.

use anyhow::Result;
use tracing::info;

use termcaster::core::{Controller, MoveOutcome};
use termcaster::input::read_command;
use termcaster::term::{FrameBuffer, GameView, ShadePalette, TerminalRenderer, Viewport};
use termcaster::{logging, Config};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load(&args)?;
    logging::init(&config)?;

    let mut ctl = config.build_controller()?;
    info!(
        rows = ctl.grid().rows(),
        cols = ctl.grid().cols(),
        fov_deg = config.fov_deg,
        map = ?config.map_path,
        terminal = ?crossterm::terminal::size().ok(),
        "starting"
    );

    let view = GameView::new(ShadePalette::default());
    let mut term = TerminalRenderer::new(view.palette().clone());
    term.enter()?;

    let result = run(&mut term, &view, &mut ctl);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(ok = result.is_ok(), "shutdown");
    result
}

fn run(term: &mut TerminalRenderer, view: &GameView, ctl: &mut Controller) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        ctl.cast(w as usize);
        view.render_into(ctl, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if ctl.apply(read_command()?) == MoveOutcome::Quit {
            return Ok(());
        }
    }
}

//! Terminal bounce runner (default binary).
//!
//! Draws a ball that bounces off the edges of the terminal at ~20 fps until
//! any key is pressed.

use anyhow::Result;

use tui_bounce::engine::{run_session, LoopConfig, SleepPacer};
use tui_bounce::input::CrosstermKeys;
use tui_bounce::logging::init_logging;
use tui_bounce::term::TerminalRenderer;

fn main() -> Result<()> {
    init_logging();

    let mut term = TerminalRenderer::new();
    let mut keys = CrosstermKeys::new();
    let mut pacer = SleepPacer;

    // Restores the terminal itself before returning, on success or error.
    run_session(&mut term, &mut keys, &mut pacer, LoopConfig::default())?;
    Ok(())
}

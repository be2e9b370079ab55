//! Full run: terminal setup, the animation loop, teardown.

use anyhow::{Context, Result};
use log::{info, warn};

use crate::animation::{AnimationLoop, RunSummary};
use crate::config::LoopConfig;
use crate::core::Bounds;
use crate::input::KeyPoll;
use crate::pacer::Pacer;
use crate::term::Screen;

/// Enter the display, animate until a key is pressed, then restore the
/// terminal.
///
/// [`Screen::exit`] runs exactly once on every path after `enter` was
/// attempted, including when `enter` itself fails partway (raw mode may
/// already be on). Errors from the run take precedence over teardown errors.
pub fn run_session<S, K, P>(
    screen: &mut S,
    keys: &mut K,
    pacer: &mut P,
    config: LoopConfig,
) -> Result<RunSummary>
where
    S: Screen + ?Sized,
    K: KeyPoll + ?Sized,
    P: Pacer + ?Sized,
{
    if let Err(err) = screen.enter() {
        if let Err(restore) = screen.exit() {
            warn!("failed to restore terminal after setup error: {restore:#}");
        }
        return Err(err.context("failed to initialize terminal"));
    }

    let result = animate(screen, keys, pacer, config);

    match (result, screen.exit()) {
        (Ok(summary), Ok(())) => {
            info!(
                "stopped after {} frames ({} bounces)",
                summary.frames, summary.bounces
            );
            Ok(summary)
        }
        (Ok(_), Err(restore)) => Err(restore.context("failed to restore terminal")),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(restore)) => {
            warn!("failed to restore terminal: {restore:#}");
            Err(err)
        }
    }
}

fn animate<S, K, P>(
    screen: &mut S,
    keys: &mut K,
    pacer: &mut P,
    config: LoopConfig,
) -> Result<RunSummary>
where
    S: Screen + ?Sized,
    K: KeyPoll + ?Sized,
    P: Pacer + ?Sized,
{
    let viewport = screen.viewport()?;
    let bounds =
        Bounds::new(viewport.width, viewport.height).context("unusable terminal size")?;
    info!("animating in {}x{} viewport", bounds.width(), bounds.height());

    AnimationLoop::new(bounds, config).run(screen, keys, pacer)
}

//! Animation loop module.
//!
//! Couples the pure physics in `tui_bounce_core` to the display and input
//! contracts: every frame polls for a key, draws the ball, steps the physics,
//! flushes, sleeps, and clears.
//!
//! - [`AnimationLoop`]: the per-frame driver, one [`AnimationLoop::frame`] at a time
//! - [`run_session`]: terminal setup, the loop, and exactly one teardown
//! - [`Pacer`]: how the loop waits between frames
//!
//! Nothing here touches a real terminal directly, so the whole loop runs
//! against `MemoryScreen` and scripted key sources in tests.

pub mod animation;
pub mod config;
pub mod pacer;
pub mod session;

pub use tui_bounce_core as core;
pub use tui_bounce_input as input;
pub use tui_bounce_term as term;
pub use tui_bounce_types as types;

pub use animation::{AnimationLoop, LoopState, RunSummary};
pub use config::LoopConfig;
pub use pacer::{Pacer, SleepPacer};
pub use session::run_session;

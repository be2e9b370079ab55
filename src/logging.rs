//! Logger initialization.
//!
//! Logs go to stderr, which shares the terminal with the animation. Only
//! warnings and errors are shown unless `RUST_LOG` says otherwise; redirect
//! stderr (`2>bounce.log`) when raising the level to keep the screen clean.

use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global logger. Later calls are ignored.
pub fn init_logging() {
    let env = Env::default().default_filter_or(DEFAULT_FILTER);
    // Another logger may already be installed (tests, embedding).
    let _ = Builder::from_env(env).try_init();
}

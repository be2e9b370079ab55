//! TUI Bounce (workspace facade crate).
//!
//! Re-exports the member crates under short names so the binary, benches and
//! integration tests can write `tui_bounce::{core,engine,input,term,types}`.

pub mod logging;

pub use tui_bounce_core as core;
pub use tui_bounce_engine as engine;
pub use tui_bounce_input as input;
pub use tui_bounce_term as term;
pub use tui_bounce_types as types;

//! Terminal input module (loop-facing).
//!
//! The animation loop only needs to know whether *some* key was pressed since
//! the last frame. [`KeyPoll`] is that contract; [`CrosstermKeys`] implements
//! it over `crossterm`'s event queue without ever blocking.

pub mod poll;

pub use poll::{is_exit_event, CrosstermKeys, KeyPoll};

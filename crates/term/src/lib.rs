//! Terminal display module.
//!
//! A small, game-oriented rendering layer: the loop draws into a framebuffer
//! of character cells, and a backend makes that framebuffer visible.
//!
//! - [`Screen`] is the display contract the animation loop depends on
//! - [`TerminalRenderer`] implements it over `crossterm`, flushing only the
//!   cells that changed since the last presented frame
//! - [`FramePresenter`] decides between full redraws and diffs, without I/O
//! - [`MemoryScreen`] implements it in memory for headless runs and tests

pub mod fb;
pub mod memory;
pub mod renderer;
pub mod screen;

pub use fb::{FrameBuffer, BLANK};
pub use memory::MemoryScreen;
pub use renderer::{encode_diff_into, encode_full_into, FramePresenter, TerminalRenderer};
pub use screen::{Screen, Viewport};

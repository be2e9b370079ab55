//! Display contract used by the animation loop.

use anyhow::Result;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A character-grid display.
///
/// Drawing and clearing only touch the pending frame; nothing becomes
/// visible until [`Screen::flush`].
pub trait Screen {
    /// Enter full-screen mode: raw input, hidden cursor.
    fn enter(&mut self) -> Result<()>;

    /// Current size in cells.
    fn viewport(&mut self) -> Result<Viewport>;

    /// Place `glyph` at column `x`, row `y` of the pending frame.
    fn draw_glyph(&mut self, x: u16, y: u16, glyph: char) -> Result<()>;

    /// Make everything drawn since the last flush visible.
    fn flush(&mut self) -> Result<()>;

    /// Erase the pending frame.
    fn clear(&mut self) -> Result<()>;

    /// Restore the terminal to its state before [`Screen::enter`].
    fn exit(&mut self) -> Result<()>;
}

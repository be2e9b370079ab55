//! In-memory [`Screen`] for headless runs and tests.

use anyhow::{bail, Result};

use crate::fb::FrameBuffer;
use crate::screen::{Screen, Viewport};

/// A screen that keeps its frames in memory and counts lifecycle calls.
#[derive(Debug, Clone)]
pub struct MemoryScreen {
    viewport: Viewport,
    back: FrameBuffer,
    presented: FrameBuffer,
    fail_enter: bool,
    entered: bool,
    pub enter_calls: usize,
    pub exit_calls: usize,
    pub flush_calls: usize,
    pub clear_calls: usize,
    /// Every `draw_glyph` call, in order.
    pub draws: Vec<(u16, u16, char)>,
}

impl MemoryScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            back: FrameBuffer::new(width, height),
            presented: FrameBuffer::new(width, height),
            fail_enter: false,
            entered: false,
            enter_calls: 0,
            exit_calls: 0,
            flush_calls: 0,
            clear_calls: 0,
            draws: Vec::new(),
        }
    }

    /// Make [`Screen::enter`] fail, like an unsupported terminal.
    pub fn with_failing_enter(mut self) -> Self {
        self.fail_enter = true;
        self
    }

    /// Frame being composed.
    pub fn back(&self) -> &FrameBuffer {
        &self.back
    }

    /// Frame made visible by the last flush.
    pub fn presented(&self) -> &FrameBuffer {
        &self.presented
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }
}

impl Screen for MemoryScreen {
    fn enter(&mut self) -> Result<()> {
        self.enter_calls += 1;
        if self.fail_enter {
            bail!("terminal does not support full-screen mode");
        }
        self.entered = true;
        Ok(())
    }

    fn viewport(&mut self) -> Result<Viewport> {
        Ok(self.viewport)
    }

    fn draw_glyph(&mut self, x: u16, y: u16, glyph: char) -> Result<()> {
        self.draws.push((x, y, glyph));
        self.back.put_char(x, y, glyph);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_calls += 1;
        self.presented.copy_from(&self.back);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clear_calls += 1;
        self.back.clear();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.exit_calls += 1;
        self.entered = false;
        Ok(())
    }
}

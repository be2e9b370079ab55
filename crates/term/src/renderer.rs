//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Drawing goes into a back framebuffer. On flush, only the runs of cells that
//! differ from the last presented frame are encoded, so a bouncing glyph costs
//! two cursor moves per frame instead of a full-screen repaint.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::screen::{Screen, Viewport};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    back: FrameBuffer,
    presenter: FramePresenter,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            back: FrameBuffer::new(0, 0),
            presenter: FramePresenter::new(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Screen for TerminalRenderer {
    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf().context("failed to enter alternate screen")?;
        self.presenter.invalidate();
        Ok(())
    }

    fn viewport(&mut self) -> Result<Viewport> {
        let (w, h) = terminal::size().context("failed to query terminal size")?;
        if self.back.width() != w || self.back.height() != h {
            self.back.resize(w, h);
            self.presenter.invalidate();
        }
        Ok(Viewport::new(w, h))
    }

    fn draw_glyph(&mut self, x: u16, y: u16, glyph: char) -> Result<()> {
        self.back.put_char(x, y, glyph);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.buf.clear();
        self.presenter.present_into(&self.back, &mut self.buf)?;
        self.flush_buf()
    }

    fn clear(&mut self) -> Result<()> {
        self.back.clear();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        let written = encode_restore_into(&mut self.buf).and_then(|()| self.flush_buf());
        finish_restore(written, terminal::disable_raw_mode)
    }
}

/// Tracks the frame currently on screen and encodes the bytes needed to
/// replace it with a new one.
///
/// The first frame, and any frame after [`FramePresenter::invalidate`] or a
/// size change, is a full redraw. Every other frame is a diff against the
/// presented one, whose buffer is then overwritten in place.
#[derive(Debug, Default)]
pub struct FramePresenter {
    front: Option<FrameBuffer>,
}

impl FramePresenter {
    pub fn new() -> Self {
        Self { front: None }
    }

    /// Force the next present to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Append the commands that make `next` visible to `out`, and remember
    /// `next` as presented.
    pub fn present_into(&mut self, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
        match &mut self.front {
            Some(front) if front.width() == next.width() && front.height() == next.height() => {
                encode_diff_into(front, next, out)?;
                front.copy_from(next);
            }
            front => {
                encode_full_into(next, out)?;
                *front = Some(next.clone());
            }
        }
        Ok(())
    }
}

fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Leave raw mode even when writing the restore sequence failed; the write
/// error wins.
fn finish_restore(
    written: Result<()>,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    let raw = disable_raw_mode();
    written.context("failed to leave alternate screen")?;
    raw.context("failed to disable raw mode")?;
    Ok(())
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            out.queue(Print(fb.get(x, y).unwrap_or_default()))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            out.queue(Print(next.get(x + dx, y).unwrap_or_default()))?;
        }
        Ok(())
    })
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: every row is dirty.
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

//! Loop tunables.

use std::time::Duration;

use crate::types::{BALL_GLYPH, FRAME_MS};

/// Settings for one animation run.
///
/// There is no runtime configuration surface; the defaults come from the
/// constants in `tui_bounce_types`. The ball's starting state is not a
/// setting: every run starts from `Ball::new()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Sleep between flushing a frame and clearing it.
    pub frame_interval: Duration,
    pub glyph: char,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(FRAME_MS),
            glyph: BALL_GLYPH,
        }
    }
}

impl LoopConfig {
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }
}

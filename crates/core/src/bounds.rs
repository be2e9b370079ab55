//! Viewport bounds the ball is confined to.

use crate::error::BounceError;
use crate::types::{Position, MIN_VIEWPORT};

/// Width and height of the drawable grid, in cells.
///
/// Sampled once at startup and never changed for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    width: u16,
    height: u16,
}

impl Bounds {
    /// Validate terminal dimensions.
    ///
    /// Anything under [`MIN_VIEWPORT`] in either axis leaves no room to move
    /// between the two edge cells and is rejected.
    pub fn new(width: u16, height: u16) -> Result<Self, BounceError> {
        if width < MIN_VIEWPORT || height < MIN_VIEWPORT {
            return Err(BounceError::ViewportTooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < i32::from(self.width) && p.y < i32::from(self.height)
    }
}

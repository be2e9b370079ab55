//! Error types for physics setup

use thiserror::Error;

use crate::types::MIN_VIEWPORT;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceError {
    /// The terminal is too small for the ball to move and reflect.
    #[error(
        "viewport {width}x{height} is too small (need at least {min}x{min})",
        min = MIN_VIEWPORT
    )]
    ViewportTooSmall { width: u16, height: u16 },
}

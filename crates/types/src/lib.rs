//! Core types module - shared data structures and constants
//!
//! Pure data with no external dependencies, usable from the physics crate,
//! the renderer and the loop driver alike.
//!
//! # Coordinates
//!
//! Positions are terminal cells: `x` is the column, `y` is the row, both
//! counted from the top-left corner at `(0, 0)`.
//!
//! # Timing and appearance
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 50 | Fixed frame interval (~20 FPS) |
//! | `BALL_GLYPH` | `'o'` | Character drawn for the ball |
//! | `MIN_VIEWPORT` | 2 | Smallest usable width/height in cells |
//!
//! # Examples
//!
//! ```
//! use tui_bounce_types::{Position, START_POSITION, START_VELOCITY};
//!
//! let p = START_POSITION.offset(START_VELOCITY);
//! assert_eq!(p, Position::new(2, 2));
//! ```

/// Fixed frame interval in milliseconds (50ms ≈ 20 FPS)
pub const FRAME_MS: u64 = 50;

/// Glyph drawn at the ball's position.
pub const BALL_GLYPH: char = 'o';

/// Smallest width or height (in cells) the reflection rule is defined for.
pub const MIN_VIEWPORT: u16 = 2;

/// Where the ball starts.
pub const START_POSITION: Position = Position::new(1, 1);

/// Initial heading: one cell right and one cell down per tick.
pub const START_VELOCITY: Velocity = Velocity::new(1, 1);

/// A cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Elementwise `self + v`.
    pub const fn offset(self, v: Velocity) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

/// Per-tick displacement. Each component is `-1` or `+1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Velocity {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        START_VELOCITY
    }
}

/// Which axes reflected during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
}

impl Bounce {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

//! Core physics module - pure, deterministic, and testable
//!
//! Everything here is a total function over validated [`Bounds`]; there is no
//! I/O, no clock and no randomness, so the same viewport always produces the
//! same sequence of positions.
//!
//! # Module Structure
//!
//! - [`bounds`]: viewport dimensions, validated once at startup
//! - [`ball`]: position/velocity state, the per-tick step and reflection rule
//! - [`error`]: configuration errors
//!
//! # Example
//!
//! ```
//! use tui_bounce_core::{advance, Ball, Bounds};
//! use tui_bounce_types::{Position, Velocity};
//!
//! let bounds = Bounds::new(3, 3).unwrap();
//! let next = advance(Ball::new(), bounds);
//!
//! // (1,1) -> (2,2) touches both edges, so both axes turn around.
//! assert_eq!(next.position(), Position::new(1, 1));
//! assert_eq!(next.velocity(), Velocity::new(-1, -1));
//! ```

pub mod ball;
pub mod bounds;
pub mod error;

pub use tui_bounce_types as types;

pub use ball::{advance, Ball, Trajectory};
pub use bounds::Bounds;
pub use error::BounceError;

//! Ball state and the per-tick physics step.
//!
//! A tick moves the ball one cell along each axis, then reflects any axis
//! whose new coordinate landed on (or past) an edge cell: the velocity on
//! that axis is pointed back inward and the ball takes one extra step in the
//! new direction. The ball is therefore never left on an edge cell at the end
//! of a tick, except on a 2-cell axis where the only interior cell is 1.

use crate::bounds::Bounds;
use crate::types::{Bounce, Position, Velocity, START_POSITION, START_VELOCITY};

/// Position and velocity of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    position: Position,
    velocity: Velocity,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    /// Ball at `(1, 1)` heading `(+1, +1)`.
    pub const fn new() -> Self {
        Self {
            position: START_POSITION,
            velocity: START_VELOCITY,
        }
    }

    #[cfg(test)]
    pub(crate) const fn with_state(position: Position, velocity: Velocity) -> Self {
        Self { position, velocity }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Advance one tick in place and report which axes reflected.
    pub fn step(&mut self, bounds: Bounds) -> Bounce {
        self.position = self.position.offset(self.velocity);

        let x = reflect_axis(
            &mut self.position.x,
            &mut self.velocity.x,
            i32::from(bounds.width()),
        );
        let y = reflect_axis(
            &mut self.position.y,
            &mut self.velocity.y,
            i32::from(bounds.height()),
        );

        Bounce { x, y }
    }
}

/// Pure form of [`Ball::step`].
pub fn advance(ball: Ball, bounds: Bounds) -> Ball {
    let mut next = ball;
    next.step(bounds);
    next
}

#[inline]
fn reflect_axis(coord: &mut i32, vel: &mut i32, extent: i32) -> bool {
    // Inequalities rather than equality so a coordinate that overshoots the
    // edge is still caught.
    if *coord <= 0 {
        *vel = vel.abs();
    } else if *coord >= extent - 1 {
        *vel = -vel.abs();
    } else {
        return false;
    }
    *coord += *vel;
    true
}

/// Positions of the ball after each tick, starting from [`Ball::new`].
///
/// Infinite; combine with [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct Trajectory {
    ball: Ball,
    bounds: Bounds,
}

impl Trajectory {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            ball: Ball::new(),
            bounds,
        }
    }
}

impl Iterator for Trajectory {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        self.ball.step(self.bounds);
        Some(self.ball.position())
    }
}

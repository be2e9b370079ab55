//! The per-frame render/update driver.

use anyhow::Result;
use log::debug;

use crate::config::LoopConfig;
use crate::core::{Ball, Bounds};
use crate::input::KeyPoll;
use crate::pacer::Pacer;
use crate::term::Screen;
use crate::types::Position;

/// Loop lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered.
    pub frames: u64,
    /// Ticks on which at least one axis reflected.
    pub bounces: u64,
    /// Where the ball would have been drawn next.
    pub final_position: Position,
}

/// Owns the ball for the duration of a run.
pub struct AnimationLoop {
    ball: Ball,
    bounds: Bounds,
    config: LoopConfig,
    state: LoopState,
    frames: u64,
    bounces: u64,
}

impl AnimationLoop {
    /// Start a run with the ball at `(1, 1)` heading `(+1, +1)`.
    ///
    /// `Bounds` guarantees at least 2x2, so the start cell is always inside.
    pub fn new(bounds: Bounds, config: LoopConfig) -> Self {
        Self {
            ball: Ball::new(),
            bounds,
            config,
            state: LoopState::Running,
            frames: 0,
            bounces: 0,
        }
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            bounces: self.bounces,
            final_position: self.ball.position(),
        }
    }

    /// Run one iteration: poll, draw, step, flush, pace, clear.
    ///
    /// Once a key press has been seen this does nothing and keeps returning
    /// [`LoopState::Stopped`].
    pub fn frame<S, K, P>(
        &mut self,
        screen: &mut S,
        keys: &mut K,
        pacer: &mut P,
    ) -> Result<LoopState>
    where
        S: Screen + ?Sized,
        K: KeyPoll + ?Sized,
        P: Pacer + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        if keys.key_pressed()? {
            self.state = LoopState::Stopped;
            return Ok(LoopState::Stopped);
        }

        // Step keeps the ball inside the bounds, so both conversions succeed.
        let p = self.ball.position();
        if let (Ok(x), Ok(y)) = (u16::try_from(p.x), u16::try_from(p.y)) {
            screen.draw_glyph(x, y, self.config.glyph)?;
        }

        let bounce = self.ball.step(self.bounds);
        if bounce.any() {
            self.bounces += 1;
            debug!(
                "bounce x={} y={} at {:?}, velocity now {:?}",
                bounce.x,
                bounce.y,
                self.ball.position(),
                self.ball.velocity()
            );
        }

        screen.flush()?;
        pacer.pace(self.config.frame_interval);
        screen.clear()?;

        self.frames += 1;
        Ok(LoopState::Running)
    }

    /// Iterate [`AnimationLoop::frame`] until a key is pressed.
    pub fn run<S, K, P>(
        &mut self,
        screen: &mut S,
        keys: &mut K,
        pacer: &mut P,
    ) -> Result<RunSummary>
    where
        S: Screen + ?Sized,
        K: KeyPoll + ?Sized,
        P: Pacer + ?Sized,
    {
        while self.frame(screen, keys, pacer)? == LoopState::Running {}
        Ok(self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::term::MemoryScreen;
    use crate::types::Velocity;

    /// Reports a key press on the poll after `frames` quiet polls.
    struct PressAfter {
        frames: usize,
        polls: usize,
    }

    impl PressAfter {
        fn new(frames: usize) -> Self {
            Self { frames, polls: 0 }
        }
    }

    impl KeyPoll for PressAfter {
        fn key_pressed(&mut self) -> Result<bool> {
            self.polls += 1;
            Ok(self.polls > self.frames)
        }
    }

    #[derive(Default)]
    struct CountingPacer {
        calls: usize,
        total: Duration,
    }

    impl Pacer for CountingPacer {
        fn pace(&mut self, interval: Duration) {
            self.calls += 1;
            self.total += interval;
        }
    }

    fn setup(w: u16, h: u16) -> (AnimationLoop, MemoryScreen) {
        let bounds = Bounds::new(w, h).unwrap();
        (
            AnimationLoop::new(bounds, LoopConfig::default()),
            MemoryScreen::new(w, h),
        )
    }

    #[test]
    fn every_run_starts_at_one_one_heading_down_right() {
        for (w, h) in [(2, 2), (3, 3), (10, 5), (80, 24)] {
            let bounds = Bounds::new(w, h).unwrap();
            let config = LoopConfig::default().with_frame_interval(Duration::ZERO);
            let anim = AnimationLoop::new(bounds, config);

            assert_eq!(anim.ball().position(), Position::new(1, 1));
            assert_eq!(anim.ball().velocity(), Velocity::new(1, 1));
            assert!(bounds.contains(anim.ball().position()));
        }
    }

    #[test]
    fn every_frame_draws_a_visible_glyph() {
        let (mut anim, mut screen) = setup(10, 5);
        let mut keys = PressAfter::new(5);
        let mut pacer = CountingPacer::default();

        let mut visible = 0;
        while anim.frame(&mut screen, &mut keys, &mut pacer).unwrap() == LoopState::Running {
            if screen.presented().cells().contains(&'o') {
                visible += 1;
            }
        }

        assert_eq!(visible, 5);
        assert!(Bounds::new(10, 5).unwrap().contains(anim.summary().final_position));
    }

    #[test]
    fn first_frame_draws_at_start_then_steps() {
        let (mut anim, mut screen) = setup(10, 5);
        let mut keys = PressAfter::new(usize::MAX);
        let mut pacer = CountingPacer::default();

        let state = anim.frame(&mut screen, &mut keys, &mut pacer).unwrap();

        assert_eq!(state, LoopState::Running);
        assert_eq!(screen.draws, vec![(1, 1, 'o')]);
        assert_eq!(screen.presented().get(1, 1), Some('o'));
        assert!(screen.back().is_blank());
        assert_eq!(anim.ball().position(), Position::new(2, 2));
        assert_eq!(pacer.calls, 1);
        assert_eq!(pacer.total, Duration::from_millis(50));
    }

    #[test]
    fn each_frame_flushes_before_clearing() {
        let (mut anim, mut screen) = setup(10, 5);
        let mut keys = PressAfter::new(3);
        let mut pacer = CountingPacer::default();

        anim.run(&mut screen, &mut keys, &mut pacer).unwrap();

        assert_eq!(screen.flush_calls, 3);
        assert_eq!(screen.clear_calls, 3);
        assert_eq!(pacer.calls, 3);
        // Last presented frame holds the glyph from frame 3.
        assert_eq!(screen.presented().get(3, 3), Some('o'));
    }

    #[test]
    fn key_press_stops_before_any_render() {
        let (mut anim, mut screen) = setup(10, 5);
        let mut keys = PressAfter::new(0);
        let mut pacer = CountingPacer::default();

        let summary = anim.run(&mut screen, &mut keys, &mut pacer).unwrap();

        assert_eq!(summary.frames, 0);
        assert!(screen.draws.is_empty());
        assert_eq!(screen.flush_calls, 0);
        assert_eq!(pacer.calls, 0);
        assert_eq!(anim.ball(), Ball::new());
    }

    #[test]
    fn stopped_is_terminal() {
        let (mut anim, mut screen) = setup(10, 5);
        let mut keys = PressAfter::new(2);
        let mut pacer = CountingPacer::default();

        anim.run(&mut screen, &mut keys, &mut pacer).unwrap();
        let ball = anim.ball();
        let polls = keys.polls;

        for _ in 0..5 {
            let s = anim.frame(&mut screen, &mut keys, &mut pacer).unwrap();
            assert_eq!(s, LoopState::Stopped);
        }
        assert_eq!(anim.ball(), ball);
        assert_eq!(keys.polls, polls);
        assert_eq!(screen.draws.len(), 2);
    }

    #[test]
    fn draws_follow_trajectory_and_stay_in_bounds() {
        let (mut anim, mut screen) = setup(10, 5);
        let mut keys = PressAfter::new(100);
        let mut pacer = CountingPacer::default();

        let summary = anim.run(&mut screen, &mut keys, &mut pacer).unwrap();

        assert_eq!(summary.frames, 100);
        assert_eq!(screen.draws.len(), 100);
        for &(x, y, ch) in &screen.draws {
            assert!(x < 10 && y < 5);
            assert_eq!(ch, 'o');
        }
        // Frame 9 draws the ball after the tick-8 bounce off the right edge.
        assert_eq!(screen.draws[8], (8, 3, 'o'));
    }

    #[test]
    fn corner_bounces_on_three_by_three_count_every_tick() {
        let (mut anim, mut screen) = setup(3, 3);
        let mut keys = PressAfter::new(4);
        let mut pacer = CountingPacer::default();

        let summary = anim.run(&mut screen, &mut keys, &mut pacer).unwrap();

        assert_eq!(summary.bounces, 4);
        assert_eq!(summary.final_position, Position::new(1, 1));
        assert!(screen.draws.iter().all(|&(x, y, _)| (x, y) == (1, 1)));
        assert_eq!(anim.ball().velocity(), Velocity::new(1, 1));
    }
}

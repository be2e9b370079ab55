//! Frame pacing.

use std::thread;
use std::time::Duration;

/// Waits out the rest of a frame.
pub trait Pacer {
    fn pace(&mut self, interval: Duration);
}

/// Blocks the thread for the full frame interval.
///
/// This is the loop's only suspension point.
#[derive(Debug, Default, Clone, Copy)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pace(&mut self, interval: Duration) {
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
}

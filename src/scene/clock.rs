//! Frame clock: a monotonic elapsed-time source with a framerate floor.

use std::thread;
use std::time::{Duration, Instant};

use crate::core::time::{self, Time};

/// Wall-clock tick source bounded below by a target frame interval.
///
/// Each `tick` reports the real elapsed time since the previous tick,
/// sleeping first if less than one target frame has passed. With a
/// non-positive frame rate there is no floor and `tick` returns the raw
/// elapsed time.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    interval: Time, // Minimum seconds between ticks; 0 = unbounded
}

impl FrameClock {
    /// Create a clock targeting the given frame rate, armed at now.
    pub fn new(fps: f64) -> Self {
        Self {
            last: Instant::now(),
            interval: time::frame_interval(fps),
        }
    }

    /// Change the target frame rate for subsequent ticks.
    pub fn set_framerate(&mut self, fps: f64) {
        self.interval = time::frame_interval(fps);
    }

    /// The minimum tick length in seconds (0 when unbounded).
    pub fn interval(&self) -> Time {
        self.interval
    }

    /// Elapsed seconds since the previous tick, after enforcing the
    /// frame-interval floor. Re-arms the clock.
    pub fn tick(&mut self) -> Time {
        let elapsed = self.last.elapsed().as_secs_f64();
        if elapsed < self.interval {
            thread::sleep(Duration::from_secs_f64(self.interval - elapsed));
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}

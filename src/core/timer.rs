use std::thread;
use std::time::{Duration, Instant};

/// Paces a host-side frame loop to a target rate by sleeping out the
/// remainder of each frame slot.
///
/// Demo/host plumbing only - the draw path itself never sleeps.
#[derive(Debug)]
pub struct FrameLimiter {
    interval: Duration,
    last: Instant,
}

impl FrameLimiter {
    /// Limiter targeting `hz` frames per second.
    pub fn new(hz: f32) -> Self {
        Self {
            interval: Duration::from_secs_f32(1.0 / hz),
            last: Instant::now(),
        }
    }

    /// Target frame interval in seconds.
    pub fn interval(&self) -> f32 {
        self.interval.as_secs_f32()
    }

    /// Sleep until the next frame slot. Returns the actual elapsed seconds
    /// since the previous `wait`, which can exceed the interval when a
    /// frame ran long (no catch-up is attempted).
    pub fn wait(&mut self) -> f32 {
        let target = self.last + self.interval;
        let now = Instant::now();

        if now < target {
            thread::sleep(target - now);
        }

        let now = Instant::now();
        let delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        delta
    }
}

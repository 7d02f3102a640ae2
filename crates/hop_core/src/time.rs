//! Per-frame wall-clock sampling.
//!
//! The loop integrates with the real elapsed time between frames rather than
//! a fixed step. A clock sample that fails to advance reuses the previous
//! frame's dt, so integration never sees a negative or backwards step.

use std::time::Instant;

pub struct FrameClock {
    last: Instant,
    dt: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            dt: 0.0,
        }
    }

    /// Seconds elapsed since the previous tick. The first tick returns 0.
    pub fn tick(&mut self) -> f32 {
        self.advance(Instant::now())
    }

    fn advance(&mut self, now: Instant) -> f32 {
        if now > self.last {
            self.dt = now.duration_since(self.last).as_secs_f32();
        } else if now < self.last {
            log::warn!(
                "Clock sample went backwards; reusing previous dt ({:.4}s)",
                self.dt
            );
        }
        self.last = now;
        self.dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

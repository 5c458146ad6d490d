use std::time::{Duration, Instant};

/// Monotonic frame clock: per-frame delta plus milliseconds since start
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { start: now, last: now }
    }

    /// Time since the previous call (or since creation), resetting the reference point
    pub fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last);
        self.last = now;
        delta
    }

    /// Milliseconds since the clock was created
    pub fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

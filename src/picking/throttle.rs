/// Rate limiter for pointer hit-tests
#[derive(Debug, Clone, PartialEq)]
pub struct RaycastThrottle {
    interval_ms: f64,
    last_fired_ms: Option<f64>,
}

impl RaycastThrottle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fired_ms: None,
        }
    }

    /// A test may run when enabled, the pointer moved, and the interval has passed
    pub fn should_fire(&self, now_ms: f64, pointer_moved: bool, enabled: bool) -> bool {
        if !enabled || !pointer_moved {
            return false;
        }
        match self.last_fired_ms {
            None => true,
            Some(last) => now_ms - last > self.interval_ms,
        }
    }

    pub fn record(&mut self, now_ms: f64) {
        self.last_fired_ms = Some(now_ms);
    }
}

/// Coalesces bursts of resize events into one deferred relayout.
///
/// Each new event replaces the pending size and restarts the quiet period.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDebouncer {
    quiet_ms: f64,
    pending: Option<PendingResize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingResize {
    deadline_ms: f64,
    width: u32,
    height: u32,
}

impl ResizeDebouncer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    pub fn schedule(&mut self, now_ms: f64, width: u32, height: u32) {
        self.pending = Some(PendingResize {
            deadline_ms: now_ms + self.quiet_ms,
            width,
            height,
        });
    }

    /// Take the pending size once its quiet period has passed
    pub fn poll(&mut self, now_ms: f64) -> Option<(u32, u32)> {
        match self.pending {
            Some(pending) if now_ms >= pending.deadline_ms => {
                self.pending = None;
                Some((pending.width, pending.height))
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

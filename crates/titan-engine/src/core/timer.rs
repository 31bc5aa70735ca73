//! One-shot countdown timers polled once per tick.

/// A one-shot countdown.
///
/// `active` is true iff a start timestamp is set and less than `duration_ms`
/// has elapsed. Expiry is applied lazily by `update`, which also clears the
/// start timestamp; the timer stays idle until `activate` re-arms it.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    duration_ms: f64,
    start_ms: Option<f64>,
    active: bool,
}

impl Timer {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms as f64,
            start_ms: None,
            active: false,
        }
    }

    /// Arm the timer at `now_ms`. Re-arms unconditionally, even if active.
    pub fn activate(&mut self, now_ms: f64) {
        self.active = true;
        self.start_ms = Some(now_ms);
    }

    /// Force the timer idle without waiting for expiry.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.start_ms = None;
    }

    /// Recompute `active` against `now_ms`.
    pub fn update(&mut self, now_ms: f64) {
        if let Some(start) = self.start_ms {
            if now_ms - start >= self.duration_ms {
                self.deactivate();
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

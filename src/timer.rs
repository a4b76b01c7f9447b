/// Fires once `interval_ms` has passed since the last mark
/// Uses wrapping arithmetic, so a millisecond counter rolling over u32 is fine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalTimer {
    interval_ms: u32,
    last_ms: u32,
}

impl IntervalTimer {
    /// Creates a timer last marked at t = 0
    pub const fn new(interval_ms: u32) -> IntervalTimer {
        Self {
            interval_ms,
            last_ms: 0,
        }
    }

    /// Whether the interval has elapsed at `now_ms`
    pub fn is_due(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_ms) >= self.interval_ms
    }

    /// Restarts the interval from `now_ms`
    pub fn mark(&mut self, now_ms: u32) {
        self.last_ms = now_ms;
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

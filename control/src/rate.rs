//! Measure how many iterations the control loop runs per second.

const PERIOD_MS: u32 = 1000;

/// Count of iterations, latched once per second.
///
/// Time is passed in by the caller as a free running millisecond counter.
/// It is allowed to wrap around.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RateMeter {
    count: u32,
    rate: u32,
    last_latch_ms: u32,
}

impl RateMeter {
    #[must_use]
    pub fn new(now_ms: u32) -> Self {
        Self {
            count: 0,
            rate: 0,
            last_latch_ms: now_ms,
        }
    }

    pub fn tick(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Latch the count if a second passed since the last latch.
    ///
    /// Returns `true` when a new rate was latched. Callers use that to
    /// trigger periodic reporting.
    pub fn update(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_latch_ms) < PERIOD_MS {
            return false;
        }
        self.last_latch_ms = now_ms;
        self.rate = self.count;
        self.count = 0;
        true
    }

    /// Iterations counted during the last full second.
    #[must_use]
    pub fn rate(&self) -> u32 {
        self.rate
    }
}

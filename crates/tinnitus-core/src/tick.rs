//! Tick sources.
//!
//! The core is driven by a nominal one-second tick delivered by the host.
//! Nothing depends on wall-clock precision, so a simulated source and a
//! real-time source are interchangeable.

/// A host-provided stream of one-second ticks.
pub trait TickSource {
    /// Block until the next tick. Returns the 1-based tick number, or
    /// `None` once the source is exhausted.
    fn next_tick(&mut self) -> Option<u64>;
}

/// Delivers ticks immediately, optionally up to a limit.
#[derive(Debug, Clone, Default)]
pub struct SimulatedTicks {
    delivered: u64,
    limit: Option<u64>,
}

impl SimulatedTicks {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn limited(limit: u64) -> Self {
        Self {
            delivered: 0,
            limit: Some(limit),
        }
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }
}

impl TickSource for SimulatedTicks {
    fn next_tick(&mut self) -> Option<u64> {
        if self.limit.is_some_and(|limit| self.delivered >= limit) {
            return None;
        }
        self.delivered += 1;
        Some(self.delivered)
    }
}

/// Divides the one-second tick into a slower period.
///
/// The breathing pacer runs on a four-second beat; feed it every second
/// and act when [`Cadence::on_second`] returns true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    period_secs: u32,
    elapsed_secs: u32,
}

impl Cadence {
    pub fn new(period_secs: u32) -> Self {
        Self {
            period_secs: period_secs.max(1),
            elapsed_secs: 0,
        }
    }

    pub fn period_secs(&self) -> u32 {
        self.period_secs
    }

    /// Advance by one second. True when a full period has elapsed.
    pub fn on_second(&mut self) -> bool {
        self.elapsed_secs += 1;
        if self.elapsed_secs >= self.period_secs {
            self.elapsed_secs = 0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
    }
}

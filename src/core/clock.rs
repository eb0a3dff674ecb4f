use std::time::{Duration, Instant};

use tracing::trace;

use crate::error::PhysicsError;
use crate::Result;

/// Paces a loop at a fixed number of ticks per second.
///
/// A tick that runs over its period is followed by the next one straight
/// away; ticks are never skipped or merged.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    deadline: Option<Instant>,
    throttle: bool,
}

impl FrameClock {
    /// Creates a clock for `tick_rate` ticks per second
    pub fn new(tick_rate: u32) -> Result<Self> {
        if tick_rate == 0 {
            return Err(PhysicsError::InvalidParameter(
                "tick rate must be positive".to_string(),
            ));
        }
        Ok(Self {
            period: Duration::from_secs(1) / tick_rate,
            deadline: None,
            throttle: false,
        })
    }

    /// Length of one tick
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true if the last tick used up its whole period
    pub fn is_throttled(&self) -> bool {
        self.throttle
    }

    /// Marks the start of a tick at `now`
    pub fn begin_tick(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Marks the end of a tick at `now` and returns how long to sleep before
    /// the next one
    pub fn end_tick(&mut self, now: Instant) -> Duration {
        let remaining = self
            .deadline
            .map_or(Duration::ZERO, |deadline| deadline.saturating_duration_since(now));
        self.throttle = remaining.is_zero();
        if self.throttle {
            trace!(period = ?self.period, "tick overran its period");
        }
        remaining
    }

    /// Ends the current tick and sleeps until the next one is due
    pub fn wait(&mut self) {
        let remaining = self.end_tick(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(50),
            deadline: None,
            throttle: false,
        }
    }
}

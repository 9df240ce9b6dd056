//! Elapsed-time guards.
//!
//! Both guards work on a 32-bit millisecond counter taken from the
//! [`Instant`] they are given. Differences are computed with wrapping
//! subtraction, so a single counter wraparound between two readings is
//! handled correctly.

use embassy_time::{Duration, Instant};

/// Truncate an instant to the 32-bit millisecond counter used by the guards
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn millis32(now: Instant) -> u32 {
    now.as_millis() as u32
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
const fn duration_millis32(duration: Duration) -> u32 {
    let millis = duration.as_millis();
    if millis > u32::MAX as u64 {
        u32::MAX
    } else {
        millis as u32
    }
}

/// One-shot cycle timer
///
/// ```ignore
/// let mut timer = Timer::new(Duration::from_secs(5));
/// timer.reset(now);
/// if timer.complete(later) {
///     // ...
///     timer.reset(later);
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    total_ms: u32,
    started_ms: u32,
}

impl Timer {
    /// Create a timer whose cycle starts at the zero instant
    pub const fn new(total: Duration) -> Self {
        Self {
            total_ms: duration_millis32(total),
            started_ms: 0,
        }
    }

    /// Start a new cycle at `now`
    pub const fn reset(&mut self, now: Instant) {
        self.started_ms = millis32(now);
    }

    /// Check if more than the configured duration has passed since the last reset
    pub const fn complete(&self, now: Instant) -> bool {
        millis32(now).wrapping_sub(self.started_ms) > self.total_ms
    }

    /// Configured cycle duration
    pub const fn total(&self) -> Duration {
        Duration::from_millis(self.total_ms as u64)
    }
}

/// Recurring guard that fires once per period
///
/// The first call to [`Periodic::ready`] arms the guard and does not fire.
#[derive(Debug, Clone, Copy)]
pub struct Periodic {
    period_ms: u32,
    last_ms: Option<u32>,
}

impl Periodic {
    pub const fn new(period: Duration) -> Self {
        Self {
            period_ms: duration_millis32(period),
            last_ms: None,
        }
    }

    /// Returns true when a full period has elapsed since the last firing
    pub fn ready(&mut self, now: Instant) -> bool {
        let now_ms = millis32(now);
        let Some(last_ms) = self.last_ms else {
            self.last_ms = Some(now_ms);
            return false;
        };
        if now_ms.wrapping_sub(last_ms) < self.period_ms {
            return false;
        }
        self.last_ms = Some(now_ms);
        true
    }

    /// Re-arm the guard at `now`
    pub const fn reset(&mut self, now: Instant) {
        self.last_ms = Some(millis32(now));
    }

    pub const fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms as u64)
    }
}

//! Wrapping millisecond timestamps.
//!
//! Microcontroller tick counters are 32 bits wide and roll over after about
//! 49.7 days. Every time computation in the engine goes through [`Timestamp`]
//! so that a rollover in the middle of an animation is harmless.

use embassy_time::{Duration, Instant};

/// Half of the counter range. Deadlines further away than this are treated
/// as already in the past.
const HALF_RANGE: u32 = 1 << 31;

/// Point in time on a free-running 32-bit millisecond counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timestamp(u32);

impl Timestamp {
    /// Create a timestamp from a raw counter value
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Raw counter value
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, correct across counter rollover
    pub const fn millis_since(self, earlier: Self) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Check whether `deadline` has been reached.
    ///
    /// Uses the sign of the wrapping difference, so a deadline scheduled just
    /// before rollover is reached by a `now` just after it.
    pub const fn has_reached(self, deadline: Self) -> bool {
        self.0.wrapping_sub(deadline.0) < HALF_RANGE
    }

    /// Timestamp `delay` after this one, wrapping on overflow
    #[allow(clippy::cast_possible_truncation)]
    pub const fn wrapping_add(self, delay: Duration) -> Self {
        Self(self.0.wrapping_add(delay.as_millis() as u32))
    }
}

impl From<Instant> for Timestamp {
    /// Truncates the 64-bit instant to the low 32 bits of its millisecond
    /// count, like a hardware `millis()` counter.
    #[allow(clippy::cast_possible_truncation)]
    fn from(instant: Instant) -> Self {
        Self(instant.as_millis() as u32)
    }
}

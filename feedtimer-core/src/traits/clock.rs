//! Monotonic clock source

use crate::Millis;

/// Monotonic millisecond clock
///
/// Readings must be non-decreasing. The epoch is arbitrary (boot is typical).
pub trait Clock {
    /// Current time in milliseconds
    fn now_ms(&self) -> Millis;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> Millis {
        (**self).now_ms()
    }
}

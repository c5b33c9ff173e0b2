//! Monotonic clock backed by the embassy time driver

use embassy_time::Instant;
use feedtimer_core::traits::Clock;
use feedtimer_core::Millis;

/// Milliseconds since boot
#[derive(Debug, Clone, Copy, Default)]
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> Millis {
        Instant::now().as_millis()
    }
}

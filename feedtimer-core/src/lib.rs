//! Board-agnostic core logic for the feed timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (clock, accelerometer, buttons, pixels, tone)
//! - Lid orientation debouncing
//! - Non-blocking alarm presentation (flash + beep)
//! - Timer controller with raise history, undo and snooze
//! - Configuration type definitions
//! - Power-on self test and loop diagnostics
//!
//! Everything here is driven by repeated calls with a millisecond timestamp;
//! nothing blocks, sleeps or spawns.

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod config;
pub mod diagnostics;
pub mod lid;
pub mod selftest;
pub mod timer;
pub mod traits;

#[cfg(test)]
extern crate std;

#[cfg(test)]
pub(crate) mod testing;

/// Milliseconds from an arbitrary monotonic epoch
pub type Millis = u64;

/// Elapsed time between two clock readings
///
/// Saturates to zero if `now` precedes `since`.
#[inline]
pub const fn elapsed(now: Millis, since: Millis) -> Millis {
    now.saturating_sub(since)
}

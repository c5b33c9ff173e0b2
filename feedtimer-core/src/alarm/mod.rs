//! Alarm presentation
//!
//! Flashing and beeping are elapsed-time state machines advanced on every
//! poll. There are no timers or sleeps anywhere in here.

pub mod mute;
pub mod presenter;

pub use mute::MuteGate;
pub use presenter::{AlarmPresenter, AlarmTiming};

//! Timer control
//!
//! Owns the raise history, undo and snooze, and decides when the alarm is
//! armed. This is the single entry point polled by the firmware loop.

pub mod controller;
pub mod history;
pub mod press;

pub use controller::{FeedStatus, TickReport, TimerController};
pub use history::{RaiseHistory, HISTORY_CAPACITY};
pub use press::PressDetector;

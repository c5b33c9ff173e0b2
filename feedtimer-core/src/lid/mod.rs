//! Lid orientation detection
//!
//! Turns raw accelerometer samples into debounced lid raised/lowered edges.

pub mod debouncer;
pub mod orientation;

pub use debouncer::{LidEdge, OrientationDebouncer};
pub use orientation::{Orientation, TiltThresholds};

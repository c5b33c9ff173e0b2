//! Motion sensors

pub mod accel;

pub use accel::{g_to_mm_s2, LidAccelerometer, SlaveAddr};

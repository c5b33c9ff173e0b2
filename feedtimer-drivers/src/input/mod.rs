//! Digital inputs

pub mod buttons;

pub use buttons::{is_active, ActiveLevel, GpioButtons};

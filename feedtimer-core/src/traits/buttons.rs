//! Push button trait

/// The two push buttons on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Left button: undo the most recent raise
    A,
    /// Right button: snooze the alarm
    B,
}

/// Source of raw button levels
///
/// Implementations report the instantaneous level only. Press detection
/// (press vs. held) is done by the timer controller.
pub trait ButtonSource {
    /// Check if the given button is currently held down
    fn is_pressed(&mut self, button: Button) -> bool;
}

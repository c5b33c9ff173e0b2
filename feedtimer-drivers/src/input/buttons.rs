//! GPIO push buttons and switches

use embedded_hal::digital::InputPin;
use feedtimer_core::traits::{Button, ButtonSource};

/// Electrical level that means "pressed"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed pulls the pin high (pull-down wiring)
    High,
    /// Pressed pulls the pin low (pull-up wiring)
    Low,
}

/// Read a pin as pressed/released; a read error counts as released
pub fn is_active<P: InputPin>(pin: &mut P, active: ActiveLevel) -> bool {
    match (pin.is_high(), active) {
        (Ok(high), ActiveLevel::High) => high,
        (Ok(high), ActiveLevel::Low) => !high,
        (Err(_), _) => false,
    }
}

/// The undo (A) and snooze (B) buttons
pub struct GpioButtons<A, B> {
    a: A,
    b: B,
    active: ActiveLevel,
}

impl<A: InputPin, B: InputPin> GpioButtons<A, B> {
    pub fn new(a: A, b: B, active: ActiveLevel) -> Self {
        Self { a, b, active }
    }
}

impl<A: InputPin, B: InputPin> ButtonSource for GpioButtons<A, B> {
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::A => is_active(&mut self.a, self.active),
            Button::B => is_active(&mut self.b, self.active),
        }
    }
}

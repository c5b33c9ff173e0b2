//! PWM piezo tone output
//!
//! The PWM slice is expected to already run at the tone frequency; starting
//! the tone sets a 50% duty cycle and stopping it drives the output fully off.

use embedded_hal::pwm::SetDutyCycle;
use feedtimer_core::traits::ToneSink;

/// Duty cycle while sounding
const TONE_DUTY_PERCENT: u8 = 50;

/// Piezo driven from a PWM channel
pub struct PwmTone<P> {
    pwm: P,
    on: bool,
}

impl<P: SetDutyCycle> PwmTone<P> {
    /// Create a tone output, forcing it silent
    pub fn new(pwm: P) -> Self {
        let mut tone = Self { pwm, on: false };
        tone.stop_tone();
        tone
    }

    /// Check if the output is currently sounding
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> ToneSink for PwmTone<P> {
    fn start_tone(&mut self) {
        self.on = self.pwm.set_duty_cycle_percent(TONE_DUTY_PERCENT).is_ok();
    }

    fn stop_tone(&mut self) {
        self.pwm.set_duty_cycle_fully_off().ok();
        self.on = false;
    }
}

//! Non-blocking alarm presenter
//!
//! While armed, the presenter flashes the whole ring on/off every
//! `flash_half_period_ms` and sounds a beep burst at the moment of arming and
//! then once per `beep_interval_ms`. Tone stop is checked on every tick, so a
//! beep ends on time regardless of where the burst boundary falls.
//!
//! Disarming clears the ring, stops the tone and forgets both cycles, so the
//! next arming starts with the pixels lit and an immediate beep.

use crate::config::TimerConfig;
use crate::traits::{PixelSink, Rgb, ToneSink};
use crate::{elapsed, Millis};

/// Flash and beep timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmTiming {
    pub flash_half_period_ms: Millis,
    pub beep_interval_ms: Millis,
    pub beep_on_ms: Millis,
    pub beep_gap_ms: Millis,
    pub beeps_per_burst: u8,
    /// Colour of the lit flash phase
    pub color: Rgb,
}

impl Default for AlarmTiming {
    fn default() -> Self {
        Self::from(&TimerConfig::default())
    }
}

impl From<&TimerConfig> for AlarmTiming {
    fn from(config: &TimerConfig) -> Self {
        Self {
            flash_half_period_ms: config.flash_half_period_ms,
            beep_interval_ms: config.beep_interval_ms,
            beep_on_ms: config.beep_on_ms,
            beep_gap_ms: config.beep_gap_ms,
            beeps_per_burst: config.beeps_per_burst,
            color: Rgb::RED,
        }
    }
}

/// Progress through the current beep burst
#[derive(Debug, Clone, Copy, Default)]
struct BeepState {
    /// Start of the current burst ("never" until the first beep)
    burst_start: Option<Millis>,
    /// Start of the most recent beep in the burst
    tone_started: Millis,
    /// Tone currently commanded on
    sounding: bool,
    /// Beeps completed in the current burst
    completed: u8,
}

/// Drives the pixel ring and tone output from an armed flag and the clock
pub struct AlarmPresenter<P, T> {
    pixels: P,
    tone: T,
    timing: AlarmTiming,
    armed: bool,
    /// Start of the current flash half-cycle ("uninitialized" while disarmed)
    flash_phase_start: Option<Millis>,
    flash_on: bool,
    beep: BeepState,
}

impl<P: PixelSink, T: ToneSink> AlarmPresenter<P, T> {
    /// Create a disarmed presenter owning its outputs
    pub fn new(pixels: P, tone: T, timing: AlarmTiming) -> Self {
        Self {
            pixels,
            tone,
            timing,
            armed: false,
            flash_phase_start: None,
            flash_on: false,
            beep: BeepState::default(),
        }
    }

    /// Advance both cycles for the given armed flag
    pub fn tick(&mut self, armed: bool, now: Millis) {
        self.armed = armed;

        if !armed {
            self.pixels.clear_all();
            self.tone.stop_tone();
            self.flash_phase_start = None;
            self.flash_on = false;
            self.beep = BeepState::default();
            return;
        }

        self.update_flash(now);
        self.update_beep(now);
    }

    fn update_flash(&mut self, now: Millis) {
        match self.flash_phase_start {
            None => {
                self.flash_phase_start = Some(now);
                self.flash_on = true;
                self.pixels.fill(self.timing.color);
            }
            Some(start) if elapsed(now, start) >= self.timing.flash_half_period_ms => {
                self.flash_phase_start = Some(now);
                self.flash_on = !self.flash_on;
                if self.flash_on {
                    self.pixels.fill(self.timing.color);
                } else {
                    self.pixels.clear_all();
                }
            }
            Some(_) => {}
        }
    }

    fn update_beep(&mut self, now: Millis) {
        let since_tone = elapsed(now, self.beep.tone_started);

        // Stop check runs every tick
        if self.beep.sounding && since_tone >= self.timing.beep_on_ms {
            self.tone.stop_tone();
            self.beep.sounding = false;
            self.beep.completed = self.beep.completed.saturating_add(1);
        }

        // Remaining beeps of the current burst
        if !self.beep.sounding
            && self.beep.completed > 0
            && self.beep.completed < self.timing.beeps_per_burst
            && since_tone >= self.timing.beep_on_ms + self.timing.beep_gap_ms
        {
            self.start_beep(now);
        }

        let burst_due = match self.beep.burst_start {
            None => true,
            Some(start) => elapsed(now, start) >= self.timing.beep_interval_ms,
        };

        if burst_due {
            self.beep.burst_start = Some(now);
            self.beep.completed = 0;
            self.start_beep(now);
        }
    }

    fn start_beep(&mut self, now: Millis) {
        self.tone.start_tone();
        self.beep.tone_started = now;
        self.beep.sounding = true;
    }

    /// Armed flag from the most recent tick
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Check if the ring is in the lit flash phase
    pub fn is_flash_on(&self) -> bool {
        self.flash_on
    }

    /// Check if a beep is currently commanded on
    pub fn is_sounding(&self) -> bool {
        self.beep.sounding
    }

    pub fn pixels(&self) -> &P {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut P {
        &mut self.pixels
    }

    pub fn tone(&self) -> &T {
        &self.tone
    }

    pub fn tone_mut(&mut self) -> &mut T {
        &mut self.tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingPixels, RecordingTone};

    type Presenter = AlarmPresenter<RecordingPixels, RecordingTone>;

    fn presenter() -> Presenter {
        AlarmPresenter::new(
            RecordingPixels::new(),
            RecordingTone::default(),
            AlarmTiming::default(),
        )
    }

    /// Tick armed every `step` ms over `[from, to)`, counting flash toggles
    fn run_armed(p: &mut Presenter, from: Millis, to: Millis, step: Millis) -> u32 {
        let mut toggles = 0;
        let mut last = p.is_flash_on();
        let mut t = from;
        while t < to {
            p.tick(true, t);
            if p.is_flash_on() != last {
                toggles += 1;
                last = p.is_flash_on();
            }
            t += step;
        }
        toggles
    }

    #[test]
    fn test_disarmed_outputs_off() {
        let mut p = presenter();
        p.tick(false, 0);
        assert!(p.pixels().all_off());
        assert!(!p.tone().sounding);
        assert_eq!(p.tone().starts, 0);
    }

    #[test]
    fn test_arming_lights_and_beeps_immediately() {
        let mut p = presenter();
        p.tick(true, 5000);
        assert!(p.is_flash_on());
        assert!(p.pixels().all(Rgb::RED));
        assert!(p.tone().sounding);
        assert_eq!(p.tone().starts, 1);
    }

    #[test]
    fn test_flash_half_cycles() {
        let mut p = presenter();
        p.tick(true, 0);
        p.tick(true, 999);
        assert!(p.pixels().all(Rgb::RED));

        p.tick(true, 1000);
        assert!(!p.is_flash_on());
        assert!(p.pixels().all_off());

        p.tick(true, 1999);
        assert!(!p.is_flash_on());

        p.tick(true, 2000);
        assert!(p.is_flash_on());
        assert!(p.pixels().all(Rgb::RED));
    }

    #[test]
    fn test_ten_seconds_of_flashing() {
        let mut p = presenter();
        // The first tick lights the ring; the toggles follow every second
        let toggles = run_armed(&mut p, 0, 10_001, 1);
        assert!(toggles >= 9, "only {} toggles", toggles);
        assert_eq!(p.tone().starts, 1);
    }

    #[test]
    fn test_beep_stops_after_on_time() {
        let mut p = presenter();
        p.tick(true, 0);
        p.tick(true, 599);
        assert!(p.tone().sounding);
        p.tick(true, 600);
        assert!(!p.tone().sounding);
        assert_eq!(p.tone().stops, 1);
    }

    #[test]
    fn test_one_beep_per_minute() {
        let mut p = presenter();
        run_armed(&mut p, 0, 130_000, 10);
        // At 0, 60s and 120s
        assert_eq!(p.tone().starts, 3);
        assert!(!p.tone().sounding);
    }

    #[test]
    fn test_sparse_polling_still_stops_tone() {
        let mut p = presenter();
        p.tick(true, 0);
        // Next poll lands long after the beep should have ended
        p.tick(true, 30_000);
        assert!(!p.tone().sounding);
        assert_eq!(p.tone().starts, 1);
    }

    #[test]
    fn test_disarm_resets_cycles() {
        let mut p = presenter();
        run_armed(&mut p, 0, 1500, 10);
        assert!(!p.is_flash_on());

        p.tick(false, 1500);
        assert!(p.pixels().all_off());
        assert!(!p.tone().sounding);
        assert!(!p.is_armed());

        // Re-arming starts lit and beeps right away, not a minute later
        p.tick(true, 1600);
        assert!(p.is_flash_on());
        assert!(p.pixels().all(Rgb::RED));
        assert_eq!(p.tone().starts, 2);
    }

    #[test]
    fn test_beep_burst() {
        let timing = AlarmTiming {
            beeps_per_burst: 3,
            ..Default::default()
        };
        let mut p = AlarmPresenter::new(RecordingPixels::new(), RecordingTone::default(), timing);

        // Beeps at 0, 1600, 3200 (600 on, 1000 gap)
        run_armed(&mut p, 0, 1600, 10);
        assert_eq!(p.tone().starts, 1);
        p.tick(true, 1600);
        assert_eq!(p.tone().starts, 2);
        run_armed(&mut p, 1610, 3200, 10);
        assert_eq!(p.tone().starts, 2);
        p.tick(true, 3200);
        assert_eq!(p.tone().starts, 3);

        // Burst over until the next interval
        run_armed(&mut p, 3210, 60_000, 10);
        assert_eq!(p.tone().starts, 3);
        assert!(!p.tone().sounding);
        p.tick(true, 60_000);
        assert_eq!(p.tone().starts, 4);
    }
}

//! Timer controller
//!
//! One call to [`TimerController::tick`] runs, in order:
//!
//! 1. orientation debouncing
//! 2. history and snooze updates (raise edge, undo press, snooze press)
//! 3. the arming decision
//! 4. alarm presentation
//!
//! Arming reads the history and snooze state updated earlier in the same
//! tick, so a raise or a button press takes effect on the tick it is seen.

use super::history::RaiseHistory;
use super::press::PressDetector;
use crate::alarm::{AlarmPresenter, AlarmTiming};
use crate::config::{ConfigError, TimerConfig};
use crate::lid::{LidEdge, OrientationDebouncer};
use crate::traits::{
    AccelSample, AccelerometerSource, Button, ButtonSource, Clock, PixelSink, Rgb, SensorError,
    ToneSink,
};
use crate::{elapsed, Millis};

/// How long it has been since the last raise, in traffic-light terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedStatus {
    /// Below the due threshold
    Fresh,
    /// Past the due threshold
    Due,
    /// Past the overdue threshold
    Overdue,
    /// Past the arm threshold and alarming
    Alarm,
    /// Past the arm threshold but snoozed
    Snoozed,
}

impl FeedStatus {
    /// Ring colour shown for this status while idle
    pub fn color(&self) -> Rgb {
        match self {
            FeedStatus::Fresh => Rgb::GREEN,
            FeedStatus::Due => Rgb::YELLOW,
            FeedStatus::Overdue | FeedStatus::Alarm | FeedStatus::Snoozed => Rgb::RED,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Clock reading the tick ran at
    pub now: Millis,
    /// Debounced lid edge
    pub edge: LidEdge,
    /// Raise removed by an undo press
    pub undone: Option<Millis>,
    /// New snooze deadline set by a snooze press
    pub snoozed_until: Option<Millis>,
    /// Alarm armed after this tick
    pub armed: bool,
    /// Armed state differs from the previous tick
    pub armed_changed: bool,
    /// Sensor read failure (sample treated as inconclusive)
    pub sensor_error: Option<SensorError>,
}

/// Top-level timer state machine
pub struct TimerController<P, T> {
    config: TimerConfig,
    debouncer: OrientationDebouncer,
    presenter: AlarmPresenter<P, T>,
    history: RaiseHistory,
    /// Effective last raise while the history is empty
    boot_ms: Millis,
    snooze_until: Option<Millis>,
    undo_button: PressDetector,
    snooze_button: PressDetector,
    armed: bool,
}

impl<P: PixelSink, T: ToneSink> TimerController<P, T> {
    /// Create a controller that started at `boot_ms`
    ///
    /// `config` must already satisfy [`TimerConfig::validate`]; a beep longer
    /// than its interval would keep the tone on for good. Configs decoded with
    /// [`TimerConfig::decode`] are validated. Use [`TimerController::try_new`]
    /// for anything else.
    pub fn new(config: TimerConfig, boot_ms: Millis, pixels: P, tone: T) -> Self {
        let debouncer = OrientationDebouncer::from_config(&config);
        let presenter = AlarmPresenter::new(pixels, tone, AlarmTiming::from(&config));

        Self {
            config,
            debouncer,
            presenter,
            history: RaiseHistory::new(),
            boot_ms,
            snooze_until: None,
            undo_button: PressDetector::new(),
            snooze_button: PressDetector::new(),
            armed: false,
        }
    }

    /// Validate `config`, then create a controller that started at `boot_ms`
    pub fn try_new(
        config: TimerConfig,
        boot_ms: Millis,
        pixels: P,
        tone: T,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, boot_ms, pixels, tone))
    }

    /// Read every collaborator once and run one tick
    ///
    /// A failed sensor read is fed to the debouncer as an all-zero sample,
    /// which is inconclusive and leaves the lid state alone.
    pub fn poll<S, B, C>(&mut self, sensor: &mut S, buttons: &mut B, clock: &C) -> TickReport
    where
        S: AccelerometerSource,
        B: ButtonSource,
        C: Clock,
    {
        let now = clock.now_ms();
        let (sample, sensor_error) = match sensor.read() {
            Ok(sample) => (sample, None),
            Err(e) => (AccelSample::ZERO, Some(e)),
        };
        let undo = buttons.is_pressed(Button::A);
        let snooze = buttons.is_pressed(Button::B);

        let mut report = self.tick(sample, undo, snooze, now);
        report.sensor_error = sensor_error;
        report
    }

    /// Run one iteration with fresh inputs
    ///
    /// `button_a` and `button_b` are the current levels; presses are
    /// edge-detected here so a held button acts once.
    pub fn tick(
        &mut self,
        sample: AccelSample,
        button_a: bool,
        button_b: bool,
        now: Millis,
    ) -> TickReport {
        let mut report = TickReport {
            now,
            ..Default::default()
        };

        report.edge = self.debouncer.update(&sample, now);
        if report.edge == LidEdge::Raised {
            self.history.record(now);
            self.snooze_until = None;
        }

        if self.undo_button.update(button_a) {
            report.undone = self.history.undo();
        }

        if self.snooze_button.update(button_b) {
            let until = now.saturating_add(self.config.snooze_ms);
            self.snooze_until = Some(until);
            report.snoozed_until = Some(until);
        }

        // An expired snooze is simply forgotten
        if self.snooze_until.is_some_and(|until| now >= until) {
            self.snooze_until = None;
        }

        let armed = self.is_due(now) && self.snooze_until.is_none();
        report.armed = armed;
        report.armed_changed = armed != self.armed;
        self.armed = armed;

        self.presenter.tick(armed, now);

        if self.config.status_colors && !armed {
            self.paint_status(now);
        }

        report
    }

    fn paint_status(&mut self, now: Millis) {
        let status = self.status(now);
        let raised = self.debouncer.is_raised();
        let pixels = self.presenter.pixels_mut();
        if raised {
            pixels.clear_all();
        } else {
            pixels.fill(status.color());
        }
    }

    /// Past the arm threshold, ignoring snooze
    fn is_due(&self, now: Millis) -> bool {
        self.since_last_raise(now) >= self.config.arm_threshold_ms
    }

    /// Effective last raise: newest history entry, or boot time
    pub fn last_raise(&self) -> Millis {
        self.history.last().unwrap_or(self.boot_ms)
    }

    /// Time elapsed since the effective last raise
    pub fn since_last_raise(&self, now: Millis) -> Millis {
        elapsed(now, self.last_raise())
    }

    /// Classify the time since the last raise
    pub fn status(&self, now: Millis) -> FeedStatus {
        let since = self.since_last_raise(now);

        if since >= self.config.arm_threshold_ms {
            match self.snooze_until {
                Some(until) if now < until => FeedStatus::Snoozed,
                _ => FeedStatus::Alarm,
            }
        } else if since >= self.config.overdue_threshold_ms {
            FeedStatus::Overdue
        } else if since >= self.config.due_threshold_ms {
            FeedStatus::Due
        } else {
            FeedStatus::Fresh
        }
    }

    /// Armed state from the most recent tick
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Debounced lid state
    pub fn is_lid_raised(&self) -> bool {
        self.debouncer.is_raised()
    }

    pub fn snooze_until(&self) -> Option<Millis> {
        self.snooze_until
    }

    pub fn history(&self) -> &RaiseHistory {
        &self.history
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn presenter(&self) -> &AlarmPresenter<P, T> {
        &self.presenter
    }

    pub fn pixels(&self) -> &P {
        self.presenter.pixels()
    }

    pub fn pixels_mut(&mut self) -> &mut P {
        self.presenter.pixels_mut()
    }

    pub fn tone(&self) -> &T {
        self.presenter.tone()
    }

    pub fn tone_mut(&mut self) -> &mut T {
        self.presenter.tone_mut()
    }
}

//! Hardware-free fakes shared by the unit tests

use core::cell::Cell;

use crate::traits::{
    AccelSample, AccelerometerSource, Button, ButtonSource, Clock, PixelSink, Rgb, SensorError,
    ToneSink,
};
use crate::Millis;

pub const RING: usize = 10;

/// Pixel ring that remembers its contents
pub struct RecordingPixels {
    pub pixels: [Rgb; RING],
    pub clears: u32,
}

impl RecordingPixels {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb::OFF; RING],
            clears: 0,
        }
    }

    pub fn all(&self, color: Rgb) -> bool {
        self.pixels.iter().all(|p| *p == color)
    }

    pub fn all_off(&self) -> bool {
        self.all(Rgb::OFF)
    }
}

impl PixelSink for RecordingPixels {
    fn len(&self) -> usize {
        RING
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(p) = self.pixels.get_mut(index) {
            *p = color;
        }
    }

    fn clear_all(&mut self) {
        self.pixels = [Rgb::OFF; RING];
        self.clears += 1;
    }
}

/// Tone output that counts start/stop commands
#[derive(Default)]
pub struct RecordingTone {
    pub sounding: bool,
    pub starts: u32,
    pub stops: u32,
}

impl ToneSink for RecordingTone {
    fn start_tone(&mut self) {
        self.sounding = true;
        self.starts += 1;
    }

    fn stop_tone(&mut self) {
        self.sounding = false;
        self.stops += 1;
    }
}

pub struct FakeClock {
    pub now: Cell<Millis>,
}

impl FakeClock {
    pub fn at(now: Millis) -> Self {
        Self { now: Cell::new(now) }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> Millis {
        self.now.get()
    }
}

pub struct FakeSensor {
    pub reading: Result<AccelSample, SensorError>,
}

impl AccelerometerSource for FakeSensor {
    fn read(&mut self) -> Result<AccelSample, SensorError> {
        self.reading
    }
}

#[derive(Default)]
pub struct FakeButtons {
    pub a: bool,
    pub b: bool,
}

impl ButtonSource for FakeButtons {
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::A => self.a,
            Button::B => self.b,
        }
    }
}

/// Board lying flat on the table
pub const FLAT: AccelSample = AccelSample::new(0, 0, 9807);
/// Board tipped onto its edge
pub const ON_EDGE: AccelSample = AccelSample::new(9700, 1200, 300);
/// Neither flat nor clearly on edge
pub const AMBIGUOUS: AccelSample = AccelSample::new(2000, 1500, 2500);

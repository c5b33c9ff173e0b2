//! Power-on self test
//!
//! Steps the ring through each status colour so a dead pixel or a wiring
//! fault is visible at boot. Runs from the same poll loop as everything else.

use crate::traits::{PixelSink, Rgb};
use crate::{elapsed, Millis};

/// How long each colour is shown
pub const SELF_TEST_STEP_MS: Millis = 500;

const SEQUENCE: [Rgb; 3] = [Rgb::GREEN, Rgb::YELLOW, Rgb::RED];

/// Non-blocking colour sweep
#[derive(Debug, Clone, Default)]
pub struct SelfTest {
    started: Option<Millis>,
    shown: Option<usize>,
    done: bool,
}

impl SelfTest {
    pub const fn new() -> Self {
        Self {
            started: None,
            shown: None,
            done: false,
        }
    }

    /// Advance the sweep; returns true once the ring is dark again
    pub fn step<P: PixelSink>(&mut self, now: Millis, pixels: &mut P) -> bool {
        if self.done {
            return true;
        }

        let start = *self.started.get_or_insert(now);
        let index = (elapsed(now, start) / SELF_TEST_STEP_MS) as usize;

        match SEQUENCE.get(index) {
            Some(color) => {
                if self.shown != Some(index) {
                    pixels.fill(*color);
                    self.shown = Some(index);
                }
                false
            }
            None => {
                pixels.clear_all();
                self.done = true;
                true
            }
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingPixels;

    #[test]
    fn test_sweep() {
        let mut pixels = RecordingPixels::new();
        let mut post = SelfTest::new();

        assert!(!post.step(1000, &mut pixels));
        assert!(pixels.all(Rgb::GREEN));
        assert!(!post.step(1499, &mut pixels));
        assert!(pixels.all(Rgb::GREEN));
        assert!(!post.step(1500, &mut pixels));
        assert!(pixels.all(Rgb::YELLOW));
        assert!(!post.step(2000, &mut pixels));
        assert!(pixels.all(Rgb::RED));
        assert!(post.step(2500, &mut pixels));
        assert!(pixels.all_off());
        assert!(post.is_done());

        // Stays done without touching the ring again
        let clears = pixels.clears;
        assert!(post.step(9000, &mut pixels));
        assert_eq!(pixels.clears, clears);
    }

    #[test]
    fn test_late_poll_skips_ahead() {
        let mut pixels = RecordingPixels::new();
        let mut post = SelfTest::new();
        post.step(0, &mut pixels);
        assert!(!post.step(1200, &mut pixels));
        assert!(pixels.all(Rgb::RED));
    }
}

//! Pixel frame buffer for WS2812 rings
//!
//! The core writes pixels synchronously during a tick; the WS2812 transfer
//! is asynchronous (PIO + DMA). `PixelFrame` sits in between: the controller
//! draws into it and the firmware flushes it after the tick, only when the
//! frame actually changed since the last flush.

use feedtimer_core::traits::{PixelSink, Rgb};
use smart_leds::{brightness, RGB8};

/// In-memory ring of `N` pixels
pub struct PixelFrame<const N: usize> {
    current: [RGB8; N],
    /// Frame as last handed out for transfer
    flushed: Option<[RGB8; N]>,
}

impl<const N: usize> Default for PixelFrame<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelFrame<N> {
    pub fn new() -> Self {
        Self {
            current: [RGB8::default(); N],
            flushed: None,
        }
    }

    /// Current frame contents
    pub fn current(&self) -> &[RGB8; N] {
        &self.current
    }

    /// Take the frame for transfer if it changed since the last take
    ///
    /// The returned frame is scaled to `level` (255 = full brightness).
    /// The very first call always yields a frame so the ring starts in a
    /// known state.
    pub fn take_changed(&mut self, level: u8) -> Option<[RGB8; N]> {
        if self.flushed == Some(self.current) {
            return None;
        }
        self.flushed = Some(self.current);

        let mut out = [RGB8::default(); N];
        for (slot, color) in out
            .iter_mut()
            .zip(brightness(self.current.iter().copied(), level))
        {
            *slot = color;
        }
        Some(out)
    }
}

impl<const N: usize> PixelSink for PixelFrame<N> {
    fn len(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.current.get_mut(index) {
            *pixel = RGB8::new(color.r, color.g, color.b);
        }
    }

    fn clear_all(&mut self) {
        self.current = [RGB8::default(); N];
    }
}

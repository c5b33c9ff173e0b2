//! Addressable pixel ring trait

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 24-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const YELLOW: Self = Self::new(255, 128, 0);
    pub const RED: Self = Self::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed-size ring of addressable pixels
pub trait PixelSink {
    /// Number of pixels in the ring
    fn len(&self) -> usize;

    /// Check if the ring has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set one pixel; out-of-range indices are ignored
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Turn every pixel off
    fn clear_all(&mut self);

    /// Set every pixel to the same colour
    fn fill(&mut self, color: Rgb) {
        for index in 0..self.len() {
            self.set_pixel(index, color);
        }
    }
}

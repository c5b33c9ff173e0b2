//! Pixel and tone outputs

pub mod pixels;
pub mod tone;

pub use pixels::PixelFrame;
pub use tone::PwmTone;

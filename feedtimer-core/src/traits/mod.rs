//! Hardware abstraction traits
//!
//! These traits define the interface between the timer logic and the
//! board-specific collaborators. The core never reaches for hardware on its
//! own; everything is injected by the firmware (or by fakes in tests).

pub mod buttons;
pub mod clock;
pub mod pixels;
pub mod sensor;
pub mod tone;

pub use buttons::{Button, ButtonSource};
pub use clock::Clock;
pub use pixels::{PixelSink, Rgb};
pub use sensor::{AccelSample, AccelerometerSource, SensorError};
pub use tone::ToneSink;

//! Accelerometer sensor trait

/// Errors that can occur while reading the accelerometer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed
    Bus,
    /// Device did not identify itself as expected
    NotDetected,
}

/// One 3-axis acceleration reading
///
/// Units are mm/s² (so a board resting flat reads roughly `z = ±9807`).
/// Samples are produced fresh each poll and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelSample {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl AccelSample {
    /// All-zero reading; classifies as inconclusive
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Trait for 3-axis accelerometers
///
/// Takes `&mut self` because bus reads typically require mutable access.
pub trait AccelerometerSource {
    /// Read the current acceleration vector
    fn read(&mut self) -> Result<AccelSample, SensorError>;
}

/// A sensor that failed to initialize reads as not detected
impl<S: AccelerometerSource> AccelerometerSource for Option<S> {
    fn read(&mut self) -> Result<AccelSample, SensorError> {
        match self {
            Some(sensor) => sensor.read(),
            None => Err(SensorError::NotDetected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeSensor, FLAT};

    #[test]
    fn test_missing_sensor_reads_not_detected() {
        let mut missing: Option<FakeSensor> = None;
        assert_eq!(missing.read(), Err(SensorError::NotDetected));

        let mut present = Some(FakeSensor { reading: Ok(FLAT) });
        assert_eq!(present.read(), Ok(FLAT));
    }
}

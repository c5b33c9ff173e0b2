//! LIS3DH 3-axis accelerometer over I2C
//!
//! Wraps the `lis3dh` driver set to ±2 g at 100 Hz. Readings are reported to
//! the core in mm/s², fine enough that summing two axes against a whole-m/s²
//! tilt threshold does not lose the fractional parts.

use embedded_hal::i2c::I2c;
use feedtimer_core::traits::{AccelSample, AccelerometerSource, SensorError};
use lis3dh::accelerometer::Accelerometer;
use lis3dh::{DataRate, Lis3dh, Lis3dhI2C, Range};

pub use lis3dh::SlaveAddr;

/// Standard gravity in mm/s²
const GRAVITY_MM_S2: f32 = 9806.65;

/// Lid-mounted LIS3DH
pub struct LidAccelerometer<I2C> {
    sensor: Lis3dh<Lis3dhI2C<I2C>>,
}

impl<I2C: I2c> LidAccelerometer<I2C> {
    /// Check the device identity and configure range and data rate
    pub fn new(i2c: I2C, address: SlaveAddr) -> Result<Self, SensorError> {
        let init_error = |e| match e {
            lis3dh::Error::WrongAddress => SensorError::NotDetected,
            _ => SensorError::Bus,
        };

        let mut sensor = Lis3dh::new_i2c(i2c, address).map_err(init_error)?;
        sensor.set_range(Range::G2).map_err(init_error)?;
        sensor.set_datarate(DataRate::Hz_100).map_err(init_error)?;
        Ok(Self { sensor })
    }
}

/// Convert an acceleration in g to mm/s², truncating toward zero
pub fn g_to_mm_s2(g: f32) -> i32 {
    (g * GRAVITY_MM_S2) as i32
}

impl<I2C: I2c> AccelerometerSource for LidAccelerometer<I2C> {
    fn read(&mut self) -> Result<AccelSample, SensorError> {
        let g = self.sensor.accel_norm().map_err(|_| SensorError::Bus)?;
        Ok(AccelSample::new(
            g_to_mm_s2(g.x),
            g_to_mm_s2(g.y),
            g_to_mm_s2(g.z),
        ))
    }
}

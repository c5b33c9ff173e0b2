//! Configuration type definitions
//!
//! These types represent the timer configuration. The firmware embeds a
//! postcard-serialized copy generated from `timer.toml` at build time.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Millis;

/// One hour in milliseconds
pub const ONE_HOUR_MS: Millis = 3_600_000;

/// Upper bound on an encoded [`TimerConfig`]
pub const MAX_ENCODED_LEN: usize = 128;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce interval must be non-zero
    ZeroDebounce,
    /// Flash half-period must be non-zero
    ZeroFlashPeriod,
    /// Beep interval, beep length and beep count must be non-zero
    ZeroBeep,
    /// A full beep burst must fit inside one beep interval
    BeepBurstTooLong,
    /// Thresholds must satisfy due <= overdue <= arm
    ThresholdOrder,
    /// Encoded configuration could not be decoded
    Decode,
    /// Output buffer too small to encode configuration
    Encode,
}

/// Timer configuration
///
/// All durations are in milliseconds. Orientation thresholds are in the
/// whole m/s².
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerConfig {
    /// Time since the last raise after which the alarm arms
    pub arm_threshold_ms: Millis,
    /// Time since the last raise after which the status becomes Due
    pub due_threshold_ms: Millis,
    /// Time since the last raise after which the status becomes Overdue
    pub overdue_threshold_ms: Millis,
    /// How long a snooze press suppresses the alarm
    pub snooze_ms: Millis,
    /// How long an orientation must persist before it is confirmed
    pub debounce_ms: Millis,
    /// `|z| >= flat_z_min` classifies as flat
    pub flat_z_min: u32,
    /// `|x| + |y| > edge_xy_min` (when not flat) classifies as on edge
    pub edge_xy_min: u32,
    /// Flash toggle period (half of a full on/off cycle)
    pub flash_half_period_ms: Millis,
    /// One beep burst per interval while armed
    pub beep_interval_ms: Millis,
    /// Length of one beep
    pub beep_on_ms: Millis,
    /// Silence between beeps inside a burst
    pub beep_gap_ms: Millis,
    /// Number of beeps in a burst
    pub beeps_per_burst: u8,
    /// Paint the feed status colour on the ring while idle
    pub status_colors: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            arm_threshold_ms: ONE_HOUR_MS * 12,
            due_threshold_ms: ONE_HOUR_MS * 4,
            overdue_threshold_ms: ONE_HOUR_MS * 8,
            snooze_ms: ONE_HOUR_MS,
            debounce_ms: 100,
            flat_z_min: 4,
            edge_xy_min: 4,
            flash_half_period_ms: 1000,
            beep_interval_ms: 60_000,
            beep_on_ms: 600,
            beep_gap_ms: 1000,
            beeps_per_burst: 1,
            status_colors: false,
        }
    }
}

impl TimerConfig {
    /// Total length of one beep burst, from first tone start to last tone stop
    pub fn burst_length_ms(&self) -> Millis {
        let beeps = Millis::from(self.beeps_per_burst);
        let gaps = beeps.saturating_sub(1);
        beeps
            .saturating_mul(self.beep_on_ms)
            .saturating_add(gaps.saturating_mul(self.beep_gap_ms))
    }

    /// Check the configuration for values the timer cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }

        if self.flash_half_period_ms == 0 {
            return Err(ConfigError::ZeroFlashPeriod);
        }

        if self.beep_interval_ms == 0 || self.beep_on_ms == 0 || self.beeps_per_burst == 0 {
            return Err(ConfigError::ZeroBeep);
        }

        if self.burst_length_ms() >= self.beep_interval_ms {
            return Err(ConfigError::BeepBurstTooLong);
        }

        if self.due_threshold_ms > self.overdue_threshold_ms
            || self.overdue_threshold_ms > self.arm_threshold_ms
        {
            return Err(ConfigError::ThresholdOrder);
        }

        Ok(())
    }

    /// Serialize to postcard, returning the number of bytes written
    #[cfg(feature = "serde")]
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, ConfigError> {
        postcard::to_slice(self, buf)
            .map(|used| used.len())
            .map_err(|_| ConfigError::Encode)
    }

    /// Deserialize from postcard and validate
    #[cfg(feature = "serde")]
    pub fn decode(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = TimerConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.snooze_ms, 3_600_000);
        assert_eq!(config.debounce_ms, 100);
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let config = TimerConfig {
            debounce_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounce));
    }

    #[test]
    fn test_zero_beep_rejected() {
        let config = TimerConfig {
            beeps_per_burst: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBeep));
    }

    #[test]
    fn test_burst_must_fit_interval() {
        // 3 beeps: 3 × 600 + 2 × 1000 = 3800ms
        let config = TimerConfig {
            beeps_per_burst: 3,
            ..Default::default()
        };
        assert_eq!(config.burst_length_ms(), 3800);
        assert_eq!(config.validate(), Ok(()));

        let config = TimerConfig {
            beeps_per_burst: 3,
            beep_interval_ms: 3800,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::BeepBurstTooLong));
    }

    #[test]
    fn test_threshold_order() {
        let config = TimerConfig {
            due_threshold_ms: ONE_HOUR_MS * 13,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ThresholdOrder));

        // A short alarm with status thresholds collapsed onto it is fine
        let config = TimerConfig {
            arm_threshold_ms: 600_000,
            due_threshold_ms: 600_000,
            overdue_threshold_ms: 600_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_roundtrip() {
        let config = TimerConfig {
            arm_threshold_ms: 600_000,
            due_threshold_ms: 200_000,
            overdue_threshold_ms: 400_000,
            beeps_per_burst: 3,
            status_colors: true,
            ..Default::default()
        };

        let mut buf = [0u8; MAX_ENCODED_LEN];
        let len = config.encode(&mut buf).unwrap();
        let decoded = TimerConfig::decode(&buf[..len]).unwrap();
        assert_eq!(decoded, config);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_decode_rejects_invalid() {
        let config = TimerConfig {
            debounce_ms: 0,
            ..Default::default()
        };
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let len = config.encode(&mut buf).unwrap();
        assert_eq!(
            TimerConfig::decode(&buf[..len]),
            Err(ConfigError::ZeroDebounce)
        );
        assert_eq!(TimerConfig::decode(&[0xff]), Err(ConfigError::Decode));
    }
}

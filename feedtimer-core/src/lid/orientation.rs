//! Single-sample orientation classification

use crate::config::TimerConfig;
use crate::traits::AccelSample;

const MM_PER_M: u32 = 1000;

/// Orientation of the board as seen in one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Resting level; lid lowered
    Flat,
    /// Tipped onto its edge; lid raised
    OnEdge,
    /// Neither condition holds
    Unknown,
}

impl Orientation {
    /// Raised state this orientation confirms, if any
    pub const fn raised(&self) -> Option<bool> {
        match self {
            Orientation::Flat => Some(false),
            Orientation::OnEdge => Some(true),
            Orientation::Unknown => None,
        }
    }
}

/// Classification thresholds in whole m/s²
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltThresholds {
    /// `|z|` at or above this is flat
    pub flat_z_min: u32,
    /// `|x| + |y|` above this (and not flat) is on edge
    pub edge_xy_min: u32,
}

impl Default for TiltThresholds {
    fn default() -> Self {
        Self {
            flat_z_min: 4,
            edge_xy_min: 4,
        }
    }
}

impl From<&TimerConfig> for TiltThresholds {
    fn from(config: &TimerConfig) -> Self {
        Self {
            flat_z_min: config.flat_z_min,
            edge_xy_min: config.edge_xy_min,
        }
    }
}

impl TiltThresholds {
    /// Classify one sample (in mm/s²)
    pub fn classify(&self, sample: &AccelSample) -> Orientation {
        let z = sample.z.unsigned_abs();
        let xy = sample.x.unsigned_abs().saturating_add(sample.y.unsigned_abs());

        if z >= self.flat_z_min.saturating_mul(MM_PER_M) {
            Orientation::Flat
        } else if xy > self.edge_xy_min.saturating_mul(MM_PER_M) {
            Orientation::OnEdge
        } else {
            Orientation::Unknown
        }
    }
}

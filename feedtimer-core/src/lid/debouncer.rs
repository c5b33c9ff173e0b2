//! Orientation debouncer
//!
//! A candidate orientation must be observed continuously for the debounce
//! interval before the confirmed raised/lowered state flips. Each flip is
//! reported exactly once as a [`LidEdge`].
//!
//! `Unknown` samples are inconclusive: they neither confirm the candidate nor
//! restart its run. A board wobbling through an ambiguous angle on its way
//! onto its edge therefore still confirms on time.

use super::orientation::{Orientation, TiltThresholds};
use crate::config::TimerConfig;
use crate::traits::AccelSample;
use crate::{elapsed, Millis};

/// Debounced lid transition reported by one update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LidEdge {
    /// No confirmed change this update
    #[default]
    None,
    /// Lid confirmed raised (board on its edge)
    Raised,
    /// Lid confirmed lowered (board flat)
    Lowered,
}

/// Debounces per-sample orientation into a confirmed raised state
#[derive(Debug, Clone)]
pub struct OrientationDebouncer {
    thresholds: TiltThresholds,
    debounce_ms: Millis,
    /// Orientation currently being confirmed
    candidate: Orientation,
    /// When the candidate was first observed
    candidate_since: Millis,
    /// Last confirmed state; lowered is assumed at boot
    raised: bool,
}

impl OrientationDebouncer {
    /// Create a debouncer that assumes the lid starts lowered
    pub fn new(thresholds: TiltThresholds, debounce_ms: Millis) -> Self {
        Self {
            thresholds,
            debounce_ms,
            candidate: Orientation::Unknown,
            candidate_since: 0,
            raised: false,
        }
    }

    /// Create a debouncer from the timer configuration
    pub fn from_config(config: &TimerConfig) -> Self {
        Self::new(TiltThresholds::from(config), config.debounce_ms)
    }

    /// Last confirmed state
    pub fn is_raised(&self) -> bool {
        self.raised
    }

    /// Orientation currently being confirmed
    pub fn candidate(&self) -> Orientation {
        self.candidate
    }

    /// Feed one sample taken at `now`
    pub fn update(&mut self, sample: &AccelSample, now: Millis) -> LidEdge {
        let orientation = self.thresholds.classify(sample);

        let Some(raised) = orientation.raised() else {
            return LidEdge::None;
        };

        if orientation != self.candidate {
            self.candidate = orientation;
            self.candidate_since = now;
            return LidEdge::None;
        }

        if raised == self.raised || elapsed(now, self.candidate_since) < self.debounce_ms {
            return LidEdge::None;
        }

        self.raised = raised;
        if raised {
            LidEdge::Raised
        } else {
            LidEdge::Lowered
        }
    }
}

//! Loop timing diagnostics
//!
//! Keeps a power-of-two histogram of how long each poll iteration took, so
//! a slow collaborator shows up in the periodic log instead of as sluggish
//! buttons.

use core::fmt;

use crate::config::ONE_HOUR_MS;
use crate::Millis;

/// One bucket for zero plus one per power of two up to 2^32
pub const BUCKETS: usize = 34;

/// Counts of values by the smallest power of two at or above them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; BUCKETS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    pub const fn new() -> Self {
        Self {
            counts: [0; BUCKETS],
        }
    }

    /// Bucket index for a value; 0 holds zero, `n` holds `2^(n-1)`
    fn bucket_index(value: u32) -> usize {
        if value == 0 {
            0
        } else {
            (32 - (value - 1).leading_zeros()) as usize + 1
        }
    }

    /// Upper bound of the bucket at `index`
    fn bucket_bound(index: usize) -> u64 {
        if index == 0 {
            0
        } else {
            1u64 << (index - 1)
        }
    }

    pub fn add(&mut self, value: u32) {
        let index = Self::bucket_index(value);
        self.counts[index] = self.counts[index].saturating_add(1);
    }

    /// Count in the bucket that `value` falls into
    pub fn count_for(&self, value: u32) -> u32 {
        self.counts[Self::bucket_index(value)]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Non-empty buckets as `(bound, count)`, smallest first
    pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(index, &count)| (Self::bucket_bound(index), count))
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (bound, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", bound, count)?;
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Histogram {
    fn format(&self, f: defmt::Formatter) {
        for (bound, count) in self.iter() {
            defmt::write!(f, "{}: {} ", bound, count);
        }
    }
}

/// Collects iteration times and hands out a histogram once per interval
#[derive(Debug, Clone)]
pub struct LoopProfiler {
    histogram: Histogram,
    interval_ms: Millis,
    next_report: Option<Millis>,
}

impl Default for LoopProfiler {
    fn default() -> Self {
        Self::new(ONE_HOUR_MS)
    }
}

impl LoopProfiler {
    pub const fn new(interval_ms: Millis) -> Self {
        Self {
            histogram: Histogram::new(),
            interval_ms,
            next_report: None,
        }
    }

    /// Record one iteration's duration (any unit, microseconds in firmware)
    pub fn record(&mut self, duration: u32) {
        self.histogram.add(duration);
    }

    /// Take the histogram if a report is due at `now`
    ///
    /// The first call only schedules the first report.
    pub fn report_due(&mut self, now: Millis) -> Option<Histogram> {
        let next = *self
            .next_report
            .get_or_insert(now.saturating_add(self.interval_ms));
        if now < next {
            return None;
        }

        self.next_report = Some(next.saturating_add(self.interval_ms));
        Some(core::mem::take(&mut self.histogram))
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}

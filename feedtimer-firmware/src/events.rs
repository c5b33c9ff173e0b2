//! Logging of controller events
//!
//! The controller reports what happened on every tick; this turns the
//! interesting parts into log lines without flooding RTT on every poll.

use defmt::*;
use feedtimer_core::lid::LidEdge;
use feedtimer_core::timer::TickReport;

/// Tracks state needed to log transitions only once
#[derive(Default)]
pub struct EventLog {
    sensor_faulted: bool,
}

impl EventLog {
    pub fn record(&mut self, report: &TickReport) {
        match report.edge {
            LidEdge::Raised => info!("Lid raised at {} ms", report.now),
            LidEdge::Lowered => info!("Lid lowered at {} ms", report.now),
            LidEdge::None => {}
        }

        if let Some(at) = report.undone {
            info!("Undo: forgot raise at {} ms", at);
        }

        if let Some(until) = report.snoozed_until {
            info!("Snoozed until {} ms", until);
        }

        if report.armed_changed {
            if report.armed {
                warn!("Alarm armed at {} ms", report.now);
            } else {
                info!("Alarm disarmed at {} ms", report.now);
            }
        }

        // Report a failing sensor once, not on every poll
        match (report.sensor_error, self.sensor_faulted) {
            (Some(e), false) => {
                warn!("Accelerometer read failed: {}", e);
                self.sensor_faulted = true;
            }
            (None, true) => {
                info!("Accelerometer recovered");
                self.sensor_faulted = false;
            }
            _ => {}
        }
    }
}

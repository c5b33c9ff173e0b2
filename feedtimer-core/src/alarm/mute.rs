//! Mute switch gate for the tone output

use crate::traits::ToneSink;

/// Tone sink wrapper honouring a mute switch
///
/// Only state changes reach the inner sink: repeated stops while silent are
/// swallowed, and a start while muted never sounds. Muting while a tone is
/// sounding stops it immediately. The alarm keeps its own timing either way.
pub struct MuteGate<T> {
    inner: T,
    muted: bool,
    /// Inner sink is actually sounding
    sounding: bool,
}

impl<T: ToneSink> MuteGate<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            muted: false,
            sounding: false,
        }
    }

    /// Update the mute switch state
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted && self.sounding {
            self.inner.stop_tone();
            self.sounding = false;
        }
    }

    /// Check if the inner sink is sounding
    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: ToneSink> ToneSink for MuteGate<T> {
    fn start_tone(&mut self) {
        if !self.muted && !self.sounding {
            self.inner.start_tone();
            self.sounding = true;
        }
    }

    fn stop_tone(&mut self) {
        if self.sounding {
            self.inner.stop_tone();
            self.sounding = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTone;

    #[test]
    fn test_passes_through_when_unmuted() {
        let mut gate = MuteGate::new(RecordingTone::default());
        gate.start_tone();
        assert!(gate.inner().sounding);
        gate.stop_tone();
        assert!(!gate.inner().sounding);
        assert_eq!((gate.inner().starts, gate.inner().stops), (1, 1));
    }

    #[test]
    fn test_redundant_commands_swallowed() {
        let mut gate = MuteGate::new(RecordingTone::default());
        gate.stop_tone();
        gate.stop_tone();
        gate.start_tone();
        gate.start_tone();
        assert_eq!((gate.inner().starts, gate.inner().stops), (1, 0));
    }

    #[test]
    fn test_muted_start_is_silent() {
        let mut gate = MuteGate::new(RecordingTone::default());
        gate.set_muted(true);
        gate.start_tone();
        assert!(!gate.is_sounding());
        assert_eq!(gate.inner().starts, 0);
        // Stop for a tone that never sounded is not forwarded
        gate.stop_tone();
        assert_eq!(gate.inner().stops, 0);
    }

    #[test]
    fn test_mute_while_sounding_stops() {
        let mut gate = MuteGate::new(RecordingTone::default());
        gate.start_tone();
        gate.set_muted(true);
        assert!(!gate.inner().sounding);

        gate.set_muted(false);
        assert!(!gate.inner().sounding);
        gate.start_tone();
        assert!(gate.inner().sounding);
    }
}

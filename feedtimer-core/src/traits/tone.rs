//! Tone output trait

/// Piezo/tone output
///
/// There is no duration parameter; the caller decides when to stop.
pub trait ToneSink {
    /// Start sounding the tone
    fn start_tone(&mut self);

    /// Stop sounding the tone
    fn stop_tone(&mut self);
}

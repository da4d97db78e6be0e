//! Sound effect description
//!
//! The browser client turns a [`SoundEffect`] into one oscillator tone.

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    #[default]
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

impl Waveform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
        }
    }
}

/// A single tone: starts immediately, stops after `timeout` seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundEffect {
    pub frequency: f32, // Hz
    pub waveform: Waveform,
    pub volume: f32, // Peak gain
    pub timeout: f64, // Seconds
}

impl Default for SoundEffect {
    fn default() -> Self {
        Self {
            frequency: 200.0,
            waveform: Waveform::Sine,
            volume: 1.0,
            timeout: 2.0,
        }
    }
}

impl SoundEffect {
    pub fn new(frequency: f32, waveform: Waveform, volume: f32, timeout: f64) -> Self {
        Self {
            frequency,
            waveform,
            volume,
            timeout,
        }
    }

    /// Short square-wave blip played once at startup
    pub fn startup_blip() -> Self {
        Self::new(140.0, Waveform::Square, 0.5, 0.1)
    }

    /// (start, stop) times for a tone scheduled at `current_time`
    pub fn schedule(&self, current_time: f64) -> (f64, f64) {
        (current_time, current_time + self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone() {
        let effect = SoundEffect::default();
        assert_eq!(effect.frequency, 200.0);
        assert_eq!(effect.waveform, Waveform::Sine);
        assert_eq!(effect.volume, 1.0);
        assert_eq!(effect.timeout, 2.0);
    }

    #[test]
    fn test_startup_blip() {
        let blip = SoundEffect::startup_blip();
        assert_eq!(blip.frequency, 140.0);
        assert_eq!(blip.waveform, Waveform::Square);
        assert_eq!(blip.volume, 0.5);
        assert_eq!(blip.timeout, 0.1);
    }

    #[test]
    fn test_schedule_stops_after_timeout() {
        let (start, stop) = SoundEffect::default().schedule(3.0);
        assert_eq!(start, 3.0);
        assert_eq!(stop, 5.0);
    }

    #[test]
    fn test_waveform_names() {
        assert_eq!(Waveform::Sine.as_str(), "sine");
        assert_eq!(Waveform::Triangle.as_str(), "triangle");
        assert_eq!(Waveform::Square.as_str(), "square");
        assert_eq!(Waveform::Sawtooth.as_str(), "sawtooth");
    }
}

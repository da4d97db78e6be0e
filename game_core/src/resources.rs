/// Time resource for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub dt: f32,  // Seconds since the previous frame
    pub now: f32, // Seconds since the time origin
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Turns animation-frame timestamps into frame times
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_frame_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp_ms` (milliseconds since the time origin).
    ///
    /// The first tick measures from the origin itself, so its `dt` is the
    /// whole time the page took to reach its first frame.
    pub fn tick(&mut self, timestamp_ms: f64) -> Time {
        let dt_ms = timestamp_ms - self.last_frame_ms;
        self.last_frame_ms = timestamp_ms;
        Time::new((dt_ms / 1000.0) as f32, (timestamp_ms / 1000.0) as f32)
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms
    }
}

use crate::{Params, SoundEffect};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub logical_width: f32,
    pub logical_height: f32,
    pub background_color: &'static str,
    pub foreground_color: &'static str,
    pub canvas_id: &'static str,
    pub startup_blip: SoundEffect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logical_width: Params::LOGICAL_WIDTH,
            logical_height: Params::LOGICAL_HEIGHT,
            background_color: Params::BACKGROUND_COLOR,
            foreground_color: Params::FOREGROUND_COLOR,
            canvas_id: Params::CANVAS_ID,
            startup_blip: SoundEffect::startup_blip(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical width over logical height
    pub fn aspect_ratio(&self) -> f64 {
        self.logical_width as f64 / self.logical_height as f64
    }

    /// Backing buffer size in whole pixels
    pub fn backing_size(&self) -> (u32, u32) {
        (self.logical_width as u32, self.logical_height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.logical_width, 640.0);
        assert_eq!(config.logical_height, 360.0);
        assert_eq!(config.canvas_id, "canvas");
        assert_eq!(config.background_color, "#000");
        assert_eq!(config.foreground_color, "#fff");
    }

    #[test]
    fn test_config_aspect_ratio() {
        let config = Config::new();
        assert_eq!(config.aspect_ratio(), 640.0 / 360.0);
    }

    #[test]
    fn test_config_backing_size() {
        assert_eq!(Config::new().backing_size(), (640, 360));
    }
}

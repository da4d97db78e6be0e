//! Letterboxing decision for the displayed canvas.
//!
//! Only the CSS size changes; the backing buffer stays at the logical
//! resolution.

/// How the canvas fills the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasFit {
    /// Window is relatively wider: full height, width follows
    FillHeight,
    /// Window is relatively taller (or equal): full width, height follows
    FillWidth,
}

impl CanvasFit {
    /// CSS `width` value
    pub fn width(&self) -> &'static str {
        match self {
            CanvasFit::FillHeight => "auto",
            CanvasFit::FillWidth => "100%",
        }
    }

    /// CSS `height` value
    pub fn height(&self) -> &'static str {
        match self {
            CanvasFit::FillHeight => "100%",
            CanvasFit::FillWidth => "auto",
        }
    }
}

/// Pick the fit for a window of `window_width` x `window_height` CSS pixels
pub fn fit_canvas(window_width: f64, window_height: f64, aspect_ratio: f64) -> CanvasFit {
    let window_aspect = window_width / window_height;
    let fit = if window_aspect > aspect_ratio {
        CanvasFit::FillHeight
    } else {
        CanvasFit::FillWidth
    };
    log::debug!(
        "Window {}x{} (aspect {:.3}) -> {:?}",
        window_width,
        window_height,
        window_aspect,
        fit
    );
    fit
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASPECT: f64 = 640.0 / 360.0;

    #[test]
    fn test_wide_window_fills_height() {
        let fit = fit_canvas(1920.0, 800.0, ASPECT);
        assert_eq!(fit, CanvasFit::FillHeight);
        assert_eq!(fit.height(), "100%");
        assert_eq!(fit.width(), "auto");
    }

    #[test]
    fn test_tall_window_fills_width() {
        let fit = fit_canvas(800.0, 1200.0, ASPECT);
        assert_eq!(fit, CanvasFit::FillWidth);
        assert_eq!(fit.width(), "100%");
        assert_eq!(fit.height(), "auto");
    }

    #[test]
    fn test_equal_aspect_fills_width() {
        assert_eq!(fit_canvas(1280.0, 720.0, ASPECT), CanvasFit::FillWidth);
        assert_eq!(fit_canvas(640.0, 360.0, ASPECT), CanvasFit::FillWidth);
    }

    #[test]
    fn test_zero_height_window_fills_height() {
        assert_eq!(fit_canvas(100.0, 0.0, ASPECT), CanvasFit::FillHeight);
    }

    #[test]
    fn test_empty_window_fills_width() {
        // 0/0 is NaN, which never compares greater
        assert_eq!(fit_canvas(0.0, 0.0, ASPECT), CanvasFit::FillWidth);
    }
}

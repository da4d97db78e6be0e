//! CSS letterboxing of the canvas

use game_core::{fit_canvas, CanvasFit};
use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, Window};

fn window_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| JsValue::from_str("innerHeight is not a number"))?;
    Ok((width, height))
}

/// Scale the displayed canvas to the window, keeping `aspect_ratio`.
///
/// The backing buffer is left alone.
pub fn resize_game(
    window: &Window,
    canvas: &HtmlCanvasElement,
    aspect_ratio: f64,
) -> Result<CanvasFit, JsValue> {
    let (width, height) = window_size(window)?;
    let fit = fit_canvas(width, height, aspect_ratio);

    let style = canvas.style();
    style.set_property("height", fit.height())?;
    style.set_property("width", fit.width())?;

    Ok(fit)
}

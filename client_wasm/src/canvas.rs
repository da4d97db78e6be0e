//! Canvas acquisition and the Canvas2D drawing surface

use game_core::{Aabb, Config, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Find the canvas element by id and set its backing resolution
pub fn acquire_canvas(
    document: &Document,
    config: &Config,
) -> Result<HtmlCanvasElement, JsValue> {
    let id = config.canvas_id;
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas element #{} not found", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|e| JsValue::from_str(&format!("#{} is not a canvas: {:?}", id, e)))?;

    let (width, height) = config.backing_size();
    canvas.set_width(width);
    canvas.set_height(height);

    Ok(canvas)
}

/// Canvas2D implementation of the renderer's surface
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Failed to get 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| JsValue::from_str(&format!("Unexpected 2d context type: {:?}", e)))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn fill_rect(&mut self, rect: Aabb, color: &str) {
        let size = rect.size();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn stroke_rect(&mut self, rect: Aabb, color: &str) {
        let size = rect.size();
        self.ctx.set_stroke_style_str(color);
        self.ctx.stroke_rect(
            rect.min.x as f64,
            rect.min.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }
}

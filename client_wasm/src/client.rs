use crate::audio::play_sound_effect;
use crate::canvas::{acquire_canvas, CanvasSurface};
use crate::fsm::{LoopAction, LoopFsm};
use crate::resize::resize_game;
use game_core::{clear_screen, step, Config, FrameClock, GameState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AudioContext, HtmlCanvasElement, Window};

/// Browser handles plus the logical game state they present
pub struct Client {
    window: Window,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    actx: AudioContext,
    state: GameState,
    clock: FrameClock,
    fsm: LoopFsm,
}

impl Client {
    /// Acquire canvas, 2D context and audio context. Any failure aborts startup.
    pub fn new(config: &Config) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let canvas = acquire_canvas(&document, config)?;
        let surface = CanvasSurface::new(&canvas)?;
        let actx = AudioContext::new()
            .map_err(|e| JsValue::from_str(&format!("Failed to create AudioContext: {:?}", e)))?;

        Ok(Self {
            window,
            canvas,
            surface,
            actx,
            state: GameState::new(config),
            clock: FrameClock::new(),
            fsm: LoopFsm::new(),
        })
    }

    /// Re-letterbox the canvas for the current window size
    pub fn resize(&self) -> Result<(), JsValue> {
        let fit = resize_game(&self.window, &self.canvas, self.state.aspect_ratio())?;
        log::debug!("Canvas fit: {:?}", fit);
        Ok(())
    }

    /// One animation frame: update then draw
    pub fn frame(&mut self, timestamp_ms: f64) {
        if !self.fsm.is_running() {
            return;
        }
        step(
            &mut self.state,
            &mut self.clock,
            timestamp_ms,
            &mut self.surface,
        );
    }
}

#[wasm_bindgen(start)]
pub fn run_game() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

    start().map_err(|e| {
        log::error!("Startup failed: {:?}", e);
        e
    })
}

fn start() -> Result<(), JsValue> {
    let config = Config::new();
    let mut client = Client::new(&config)?;

    client.resize()?;
    clear_screen(&client.state, &mut client.surface);
    play_sound_effect(&client.actx, &config.startup_blip)?;

    let client = Rc::new(RefCell::new(client));
    register_resize_listener(client.clone())?;

    let result = client.borrow_mut().fsm.transition(LoopAction::Start);
    log::info!(
        "Frame loop {:?} -> {:?}",
        result.from_state,
        result.to_state
    );
    request_animation_frame(client)
}

fn register_resize_listener(client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let window = client.borrow().window.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        if let Err(e) = client.borrow().resize() {
            log::error!("Resize failed: {:?}", e);
        }
    });
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let window = client.borrow().window.clone();
    let closure = Closure::once(move |timestamp: f64| {
        game_loop(client, timestamp);
    });
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    window.request_animation_frame(callback)?;
    closure.forget();
    Ok(())
}

fn game_loop(client: Rc<RefCell<Client>>, timestamp: f64) {
    client.borrow_mut().frame(timestamp);

    if let Err(e) = request_animation_frame(client) {
        log::error!("Failed to schedule next frame: {:?}", e);
    }
}

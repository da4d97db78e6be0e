//! Canvas2D client for the Pong field
//!
//! Acquires the canvas, its 2D context and an audio context once at
//! startup, then drives `game_core::step` from `requestAnimationFrame`.
//! Only the frame loop state machine is built for non-wasm targets.

pub mod fsm;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod client;
#[cfg(target_arch = "wasm32")]
mod resize;

#[cfg(target_arch = "wasm32")]
pub use client::{run_game, Client};

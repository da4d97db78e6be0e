pub mod audio;
pub mod components;
pub mod config;
pub mod layout;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod state;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use layout::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use state::*;

/// Advance the simulation by one frame.
///
/// Nothing moves yet: objects keep their spawn positions for any `dt`.
pub fn update(state: &mut GameState, time: &Time) {
    log::trace!(
        "update: dt={:.4}s now={:.3}s objects={}",
        time.dt,
        time.now,
        state.len()
    );
}

/// Run one animation frame: measure dt, update, then draw
pub fn step<S: Surface + ?Sized>(
    state: &mut GameState,
    clock: &mut FrameClock,
    timestamp_ms: f64,
    surface: &mut S,
) -> Time {
    let time = clock.tick(timestamp_ms);
    update(state, &time);
    draw(state, surface);
    time
}

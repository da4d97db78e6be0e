//! Web Audio tone synthesis

use game_core::{SoundEffect, Waveform};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Triangle => OscillatorType::Triangle,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    }
}

/// Play one tone: oscillator -> gain -> destination, stopped after the effect's timeout.
///
/// Finished oscillators are left for the browser to collect.
pub fn play_sound_effect(actx: &AudioContext, effect: &SoundEffect) -> Result<(), JsValue> {
    let oscillator = actx.create_oscillator()?;
    let volume = actx.create_gain()?;

    oscillator.connect_with_audio_node(&volume)?;
    volume.connect_with_audio_node(&actx.destination())?;

    oscillator.set_type(oscillator_type(effect.waveform));
    oscillator.frequency().set_value(effect.frequency);
    volume.gain().set_value(effect.volume);

    let (start, stop) = effect.schedule(actx.current_time());
    oscillator.start_with_when(start)?;
    oscillator.stop_with_when(stop)?;

    log::debug!(
        "Sound effect: {} Hz {} vol={} for {}s",
        effect.frequency,
        effect.waveform.as_str(),
        effect.volume,
        effect.timeout
    );
    Ok(())
}

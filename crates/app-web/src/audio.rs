use crate::constants::{TONE_ATTACK_SEC, TONE_GAIN};
use stagecraft_core::{CapabilityError, CapabilityResult};
use std::time::Duration;
use wasm_bindgen::JsValue;
use web_sys as web;

fn unavailable(e: JsValue) -> CapabilityError {
    CapabilityError::AudioUnavailable(format!("{:?}", e))
}

/// Short blips for the typewriter. The first tones are scheduled from timers,
/// outside any user gesture, so the page click handler calls [`warm_up`]
/// to create and resume the AudioContext while activation is still valid.
///
/// [`warm_up`]: ToneSynth::warm_up
#[derive(Default)]
pub struct ToneSynth {
    ctx: Option<web::AudioContext>,
}

impl ToneSynth {
    fn context(&mut self) -> Result<&web::AudioContext, CapabilityError> {
        if self.ctx.is_none() {
            let ctx = web::AudioContext::new().map_err(unavailable)?;
            log::info!("[audio] context created ({} Hz)", ctx.sample_rate());
            self.ctx = Some(ctx);
        }
        let ctx = self
            .ctx
            .as_ref()
            .ok_or_else(|| CapabilityError::AudioUnavailable("no context".into()))?;
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        Ok(ctx)
    }

    /// Create or resume the context. Call from inside a user gesture.
    pub fn warm_up(&mut self) -> CapabilityResult {
        self.context().map(|_| ())
    }

    pub fn play(&mut self, frequency_hz: f32, duration: Duration) -> CapabilityResult {
        let ctx = self.context()?;
        let src = web::OscillatorNode::new(ctx).map_err(unavailable)?;
        src.set_type(web::OscillatorType::Square);
        src.frequency().set_value(frequency_hz);

        let g = web::GainNode::new(ctx).map_err(unavailable)?;
        g.gain().set_value(0.0);
        let t0 = ctx.current_time();
        let t_end = t0 + TONE_ATTACK_SEC + duration.as_secs_f64();
        _ = g
            .gain()
            .linear_ramp_to_value_at_time(TONE_GAIN, t0 + TONE_ATTACK_SEC);
        _ = g.gain().linear_ramp_to_value_at_time(0.0, t_end);

        src.connect_with_audio_node(&g).map_err(unavailable)?;
        g.connect_with_audio_node(&ctx.destination())
            .map_err(unavailable)?;
        src.start_with_when(t0).map_err(unavailable)?;
        src.stop_with_when(t_end + 0.01).map_err(unavailable)?;
        Ok(())
    }
}

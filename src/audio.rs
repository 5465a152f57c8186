use crate::constants::{MUSIC_FALLBACK_URL, MUSIC_PRIMARY_URL};
use crate::core::constants::{BACKGROUND_VOLUME, ENVELOPE_FLOOR};
use crate::core::{AudioState, Envelope, Tone, TrackCommand, TrackSource, Waveform};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Ways the audio side can degrade. None of them reach the user.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("playback denied by the platform: {0}")]
    PlaybackDenied(String),
    #[error("background source failed to load: {0}")]
    SourceLoadFailed(String),
    #[error("audio context unavailable: {0}")]
    Context(String),
}

fn source_url(source: TrackSource) -> &'static str {
    match source {
        TrackSource::Primary => MUSIC_PRIMARY_URL,
        TrackSource::Fallback => MUSIC_FALLBACK_URL,
    }
}

/// Owned audio output: one lazily created AudioContext for the effects and
/// one looping media element for the background track.
///
/// Construct once at startup and share by `Rc<RefCell<_>>`; call `teardown`
/// to release the context, the element and its listener.
pub struct AudioResource {
    ctx: Option<web::AudioContext>,
    state: Rc<RefCell<AudioState>>,
    music: Option<web::HtmlAudioElement>,
    on_error: Option<Closure<dyn FnMut()>>,
}

impl AudioResource {
    pub fn new() -> Self {
        Self {
            ctx: None,
            state: Rc::new(RefCell::new(AudioState::new())),
            music: None,
            on_error: None,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.state.borrow().is_muted()
    }

    /// Shared context, created on first use and resumed if the platform suspended it.
    fn context(&mut self) -> Result<&web::AudioContext, AudioError> {
        if self.ctx.is_none() {
            let ctx = web::AudioContext::new().map_err(|e| AudioError::Context(format!("{:?}", e)))?;
            log::info!("[audio] context created");
            self.ctx = Some(ctx);
        }
        let ctx = self
            .ctx
            .as_ref()
            .ok_or_else(|| AudioError::Context("context missing after creation".into()))?;
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        Ok(ctx)
    }

    pub fn play_tone(&mut self, tone: Tone) {
        let Some(notes) = self.state.borrow().cue(tone) else {
            return;
        };
        let ctx = match self.context() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[audio] {}", e);
                return;
            }
        };
        let now = ctx.current_time();
        for note in notes.iter() {
            let start = now + note.offset_sec;
            if let Err(e) = schedule_note(ctx, note, start) {
                log::warn!("[audio] {:?} note failed: {:?}", tone, e);
            }
        }
    }

    /// Start the background track, or resume it if it was paused while unmuted.
    pub fn init_music(&mut self) {
        self.sync_paused();
        let cmds = self.state.borrow_mut().init_music();
        for cmd in cmds {
            self.apply(cmd);
        }
    }

    /// Flip the mute flag and return the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.sync_paused();
        let (muted, cmds) = self.state.borrow_mut().toggle_mute();
        for cmd in cmds {
            self.apply(cmd);
        }
        log::info!("[audio] muted={}", muted);
        muted
    }

    pub fn teardown(&mut self) {
        if let Some(el) = self.music.take() {
            _ = el.pause();
            if let Some(cb) = self.on_error.take() {
                _ = el.remove_event_listener_with_callback("error", cb.as_ref().unchecked_ref());
            }
        }
        if let Some(ctx) = self.ctx.take() {
            _ = ctx.close();
        }
        self.state.borrow_mut().teardown();
        log::info!("[audio] torn down");
    }

    fn sync_paused(&self) {
        if let Some(el) = &self.music {
            self.state.borrow_mut().observe_paused(el.paused());
        }
    }

    fn apply(&mut self, cmd: TrackCommand) {
        match cmd {
            TrackCommand::Create { source, muted } => match self.create_music(source, muted) {
                Ok(el) => self.music = Some(el),
                Err(e) => {
                    log::error!("[audio] {}", e);
                    self.state.borrow_mut().on_create_failed();
                }
            },
            other => {
                if let Some(el) = &self.music {
                    apply_to_element(el, other);
                }
            }
        }
    }

    fn create_music(&mut self, source: TrackSource, muted: bool) -> Result<web::HtmlAudioElement, AudioError> {
        let el = web::HtmlAudioElement::new_with_src(source_url(source))
            .map_err(|e| AudioError::SourceLoadFailed(format!("{:?}", e)))?;
        el.set_loop(true);
        el.set_volume(BACKGROUND_VOLUME);
        el.set_muted(muted);

        let state = self.state.clone();
        let el_for_error = el.clone();
        let on_error = Closure::wrap(Box::new(move || {
            log::error!(
                "[audio] {}",
                AudioError::SourceLoadFailed(el_for_error.src())
            );
            let cmds = state.borrow_mut().on_load_error();
            for cmd in cmds {
                apply_to_element(&el_for_error, cmd);
            }
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        self.on_error = Some(on_error);
        Ok(el)
    }
}

impl Default for AudioResource {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_to_element(el: &web::HtmlAudioElement, cmd: TrackCommand) {
    match cmd {
        TrackCommand::Create { .. } => {}
        TrackCommand::SetSource(source) => el.set_src(source_url(source)),
        TrackCommand::SetMuted(muted) => el.set_muted(muted),
        TrackCommand::Play => match el.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    // Retried on the next user interaction.
                    log::debug!("[audio] {}", AudioError::PlaybackDenied(format!("{:?}", e)));
                }
            }),
            Err(e) => log::debug!("[audio] {}", AudioError::PlaybackDenied(format!("{:?}", e))),
        },
    }
}

fn schedule_note(ctx: &web::AudioContext, note: &crate::core::tones::Note, start: f64) -> Result<(), wasm_bindgen::JsValue> {
    let osc = web::OscillatorNode::new(ctx)?;
    osc.set_type(match note.waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Triangle => web::OscillatorType::Triangle,
    });
    let duration = note.envelope.duration();
    osc.frequency().set_value_at_time(note.frequency_hz, start)?;
    if let Some(target) = note.sweep_to_hz {
        osc.frequency()
            .exponential_ramp_to_value_at_time(target, start + duration)?;
    }

    let gain = web::GainNode::new(ctx)?;
    match note.envelope {
        Envelope::Decay { peak, .. } => {
            gain.gain().set_value_at_time(peak, start)?;
        }
        Envelope::AttackDecay { peak, attack, .. } => {
            gain.gain().set_value_at_time(0.0, start)?;
            gain.gain().linear_ramp_to_value_at_time(peak, start + attack)?;
        }
    }
    gain.gain()
        .exponential_ramp_to_value_at_time(ENVELOPE_FLOOR, start + duration)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start_with_when(start)?;
    osc.stop_with_when(start + duration)?;
    Ok(())
}

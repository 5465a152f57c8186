use super::constants::*;
use smallvec::{smallvec, SmallVec};

/// Oscillator shape used by the synthesized effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// The short programmatic sound effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Pop,
    Jingle,
    Chime,
}

/// Gain envelope of one note. Times are seconds from the note start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Envelope {
    /// Start at `peak` and decay exponentially to the floor at `duration`.
    Decay { peak: f32, duration: f64 },
    /// Rise linearly from silence to `peak` at `attack`, then decay
    /// exponentially to the floor at `duration`.
    AttackDecay { peak: f32, attack: f64, duration: f64 },
}

impl Envelope {
    pub fn duration(&self) -> f64 {
        match *self {
            Envelope::Decay { duration, .. } | Envelope::AttackDecay { duration, .. } => duration,
        }
    }

    pub fn peak(&self) -> f32 {
        match *self {
            Envelope::Decay { peak, .. } | Envelope::AttackDecay { peak, .. } => peak,
        }
    }
}

/// A single oscillator voice of a tone.
///
/// Fields:
/// - `offset_sec`: start relative to when the tone is played
/// - `frequency_hz`: starting pitch
/// - `sweep_to_hz`: optional exponential pitch target reached at the end of the envelope
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub waveform: Waveform,
    pub offset_sec: f64,
    pub frequency_hz: f32,
    pub sweep_to_hz: Option<f32>,
    pub envelope: Envelope,
}

pub type ToneSpec = SmallVec<[Note; 4]>;

fn arpeggio(waveform: Waveform, freqs: &[f32], step_sec: f64, envelope: Envelope) -> ToneSpec {
    freqs
        .iter()
        .enumerate()
        .map(|(i, &frequency_hz)| Note {
            waveform,
            offset_sec: i as f64 * step_sec,
            frequency_hz,
            sweep_to_hz: None,
            envelope,
        })
        .collect()
}

pub fn tone_spec(tone: Tone) -> ToneSpec {
    match tone {
        Tone::Pop => smallvec![Note {
            waveform: Waveform::Sine,
            offset_sec: 0.0,
            frequency_hz: 400.0,
            sweep_to_hz: Some(100.0),
            envelope: Envelope::Decay {
                peak: 0.5,
                duration: 0.1,
            },
        }],
        Tone::Jingle => arpeggio(
            Waveform::Triangle,
            &[NOTE_C5, NOTE_E5, NOTE_G5],
            0.08,
            Envelope::Decay {
                peak: 0.2,
                duration: 0.2,
            },
        ),
        Tone::Chime => arpeggio(
            Waveform::Sine,
            &[NOTE_C5, NOTE_E5, NOTE_G5, NOTE_C6],
            0.05,
            Envelope::AttackDecay {
                peak: 0.15,
                attack: 0.1,
                duration: 1.5,
            },
        ),
    }
}

/// Which URL the background element is playing from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackSource {
    Primary,
    Fallback,
}

/// Instruction for the media element backing the background track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackCommand {
    Create { source: TrackSource, muted: bool },
    SetSource(TrackSource),
    SetMuted(bool),
    Play,
}

pub type TrackCommands = SmallVec<[TrackCommand; 3]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackState {
    pub source: TrackSource,
    pub paused: bool,
}

/// Mute flag plus the play/pause bookkeeping of the background track.
///
/// Decisions are made here and returned as `TrackCommand`s; the caller applies
/// them to the real media element and reports back what the element did
/// (`observe_paused`), e.g. when the platform refuses autoplay.
#[derive(Clone, Debug, Default)]
pub struct AudioState {
    muted: bool,
    track: Option<TrackState>,
}

impl AudioState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn track(&self) -> Option<TrackState> {
        self.track
    }

    /// The notes to play for `tone`, or `None` while muted.
    pub fn cue(&self, tone: Tone) -> Option<ToneSpec> {
        (!self.muted).then(|| tone_spec(tone))
    }

    /// Create the background track on first call; later calls only resume a
    /// paused, unmuted track.
    pub fn init_music(&mut self) -> TrackCommands {
        let mut cmds = TrackCommands::new();
        match self.track.as_mut() {
            Some(track) => {
                if !self.muted && track.paused {
                    track.paused = false;
                    cmds.push(TrackCommand::Play);
                }
            }
            None => {
                cmds.push(TrackCommand::Create {
                    source: TrackSource::Primary,
                    muted: self.muted,
                });
                let mut track = TrackState {
                    source: TrackSource::Primary,
                    paused: true,
                };
                if !self.muted {
                    track.paused = false;
                    cmds.push(TrackCommand::Play);
                }
                self.track = Some(track);
            }
        }
        cmds
    }

    /// Flip the mute flag. Returns the new flag and the element commands.
    pub fn toggle_mute(&mut self) -> (bool, TrackCommands) {
        self.muted = !self.muted;
        let muted = self.muted;
        let cmds = match self.track.as_mut() {
            Some(track) => {
                let mut cmds: TrackCommands = smallvec![TrackCommand::SetMuted(muted)];
                if !muted && track.paused {
                    track.paused = false;
                    cmds.push(TrackCommand::Play);
                }
                cmds
            }
            None => self.init_music(),
        };
        (muted, cmds)
    }

    /// The primary source failed to load; switch once to the fallback.
    pub fn on_load_error(&mut self) -> TrackCommands {
        let mut cmds = TrackCommands::new();
        let muted = self.muted;
        if let Some(track) = self.track.as_mut() {
            if track.source == TrackSource::Primary {
                track.source = TrackSource::Fallback;
                cmds.push(TrackCommand::SetSource(TrackSource::Fallback));
                if !muted {
                    track.paused = false;
                    cmds.push(TrackCommand::Play);
                }
            }
        }
        cmds
    }

    /// Sync with the element's real play state (autoplay may have been refused).
    pub fn observe_paused(&mut self, paused: bool) {
        if let Some(track) = self.track.as_mut() {
            track.paused = paused;
        }
    }

    /// The element for a `Create` could not be built; forget the track so the
    /// next gesture tries again.
    pub fn on_create_failed(&mut self) {
        self.track = None;
    }

    pub fn teardown(&mut self) {
        self.track = None;
    }
}

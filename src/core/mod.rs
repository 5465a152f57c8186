pub mod celebration;
pub mod constants;
pub mod evasive;
pub mod messages;
pub mod ornaments;
pub mod pointer;
pub mod proposal;
pub mod tones;

pub use celebration::CelebrationParticle;
pub use evasive::ControlPose;
pub use messages::{message_or_fallback, shows_ghost, taunt_for, MessageSource, PrewrittenMessages};
pub use ornaments::OrnamentFrame;
pub use pointer::{ControlRect, Viewport};
pub use proposal::{Cue, MessageState, Phase, Proposal, Scene};
pub use tones::{AudioState, Envelope, Tone, TrackCommand, TrackSource, Waveform};

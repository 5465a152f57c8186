use super::celebration::CelebrationEmitter;
use super::constants::*;
use super::evasive::{EvasiveControl, EvasiveEvent};
use super::messages::TAUNTS;
use super::ornaments::OrnamentField;
use super::pointer::{ControlRect, PointerState, Viewport};
use super::tones::Tone;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Which question view is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingResponse,
    Accepted,
}

/// Side effects requested by the proposal for the host to carry out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Tone(Tone),
    /// Start (or resume) background music; any user gesture qualifies.
    InitMusic,
    /// Fetch a celebratory message and hand it back via `message_ready(ticket, ..)`.
    FetchMessage { ticket: u64 },
}

/// Composition shown while waiting for an answer.
pub struct AskingScene {
    pub field: OrnamentField,
    pub evasive: EvasiveControl,
    pub accept_scale: f32,
}

impl AskingScene {
    fn new(now: Duration) -> Self {
        Self {
            field: OrnamentField::new(now),
            evasive: EvasiveControl::new(TAUNTS.len()),
            accept_scale: ACCEPT_SCALE_BASE,
        }
    }

    fn note_attempt(&mut self) {
        self.accept_scale = (self.accept_scale + ACCEPT_SCALE_STEP).min(ACCEPT_SCALE_MAX);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageState {
    Loading { ticket: u64 },
    Ready(String),
}

/// Composition shown after acceptance.
pub struct AcceptedScene {
    pub celebration: CelebrationEmitter,
    pub message: MessageState,
}

pub enum Scene {
    Asking(AskingScene),
    Accepted(AcceptedScene),
}

/// Root state of the widget. Owns the phase and both compositions and routes
/// input to whichever one is mounted; components never talk to each other.
///
/// Typical usage:
/// - Construct with `Proposal::new(now, seed)`
/// - Feed pointer input via `pointer_moved` / `control_touched`
/// - Call `tick(now, viewport, control_size, &mut cues)` every frame
/// - Carry out the returned `Cue`s (sounds, music, message fetch)
pub struct Proposal {
    scene: Scene,
    pointer: PointerState,
    rng: StdRng,
    next_ticket: u64,
}

impl Proposal {
    pub fn new(now: Duration, seed: u64) -> Self {
        Self {
            scene: Scene::Asking(AskingScene::new(now)),
            pointer: PointerState::default(),
            rng: StdRng::seed_from_u64(seed),
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.scene {
            Scene::Asking(_) => Phase::AwaitingResponse,
            Scene::Accepted(_) => Phase::Accepted,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn asking(&self) -> Option<&AskingScene> {
        match &self.scene {
            Scene::Asking(s) => Some(s),
            Scene::Accepted(_) => None,
        }
    }

    pub fn accepted(&self) -> Option<&AcceptedScene> {
        match &self.scene {
            Scene::Accepted(s) => Some(s),
            Scene::Asking(_) => None,
        }
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Growth of the accept control; 1.0 outside the asking view.
    pub fn accept_scale(&self) -> f32 {
        self.asking().map_or(ACCEPT_SCALE_BASE, |s| s.accept_scale)
    }

    /// Record a pointer move. `control` is the evasive control's measured box,
    /// if it is on screen.
    pub fn pointer_moved(
        &mut self,
        now: Duration,
        pointer_px: Vec2,
        viewport: Viewport,
        control: Option<&ControlRect>,
        cues: &mut Vec<Cue>,
    ) {
        self.pointer.update(pointer_px, viewport);
        if let (Scene::Asking(scene), Some(rect)) = (&mut self.scene, control) {
            if let Some(EvasiveEvent::Anticipating) = scene.evasive.on_pointer_move(now, pointer_px, rect) {
                cues.push(Cue::Tone(Tone::Jingle));
            }
        }
    }

    /// Pointer entered or touched the evasive control directly.
    pub fn control_touched(&mut self, now: Duration, cues: &mut Vec<Cue>) {
        if let Scene::Asking(scene) = &mut self.scene {
            if let Some(EvasiveEvent::Anticipating) = scene.evasive.trigger(now) {
                cues.push(Cue::Tone(Tone::Jingle));
            }
        }
    }

    /// Advance every timed behavior of the mounted composition.
    pub fn tick(&mut self, now: Duration, viewport: Viewport, control_size: Option<Vec2>, cues: &mut Vec<Cue>) {
        match &mut self.scene {
            Scene::Asking(scene) => {
                scene.field.tick(now, &mut self.rng);
                let mut events = Vec::new();
                scene
                    .evasive
                    .poll(now, &mut self.rng, viewport, control_size, &mut events);
                for ev in events {
                    if let EvasiveEvent::Relocated { .. } = ev {
                        scene.note_attempt();
                        cues.push(Cue::InitMusic);
                    }
                }
            }
            Scene::Accepted(scene) => {
                if scene.celebration.poll(now) {
                    log::debug!("[proposal] celebration batch expired");
                }
            }
        }
    }

    /// The accept control was clicked. Ignored once already accepted.
    pub fn accept(&mut self, now: Duration, cues: &mut Vec<Cue>) {
        if let Scene::Accepted(_) = self.scene {
            return;
        }
        cues.push(Cue::InitMusic);
        cues.push(Cue::Tone(Tone::Pop));

        let mut celebration = CelebrationEmitter::new();
        celebration.emit(now, &mut self.rng);
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.scene = Scene::Accepted(AcceptedScene {
            celebration,
            message: MessageState::Loading { ticket },
        });
        log::info!("[proposal] accepted");

        cues.push(Cue::Tone(Tone::Chime));
        cues.push(Cue::FetchMessage { ticket });
    }

    /// Deliver a fetched message. Stale tickets (from an earlier acceptance) are ignored.
    pub fn message_ready(&mut self, ticket: u64, text: String) -> bool {
        match &mut self.scene {
            Scene::Accepted(scene) if scene.message == (MessageState::Loading { ticket }) => {
                scene.message = MessageState::Ready(text);
                true
            }
            _ => false,
        }
    }

    /// Back to the question with a fresh composition.
    pub fn ask_again(&mut self, now: Duration) {
        if let Scene::Accepted(_) = self.scene {
            self.scene = Scene::Asking(AskingScene::new(now));
            log::info!("[proposal] asking again");
        }
    }

    /// The wax seal on the message card was clicked.
    pub fn seal_clicked(&self, cues: &mut Vec<Cue>) {
        if let Scene::Accepted(_) = self.scene {
            cues.push(Cue::Tone(Tone::Pop));
        }
    }
}

use super::constants::*;
use super::pointer::{ControlRect, Viewport};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

/// Geometry and timing of a relocation.
#[derive(Clone, Debug, PartialEq)]
pub struct RelocationParams {
    pub proximity_px: f32,
    pub padding_px: f32,
    pub exclusion_radius_px: f32,
    pub exclusion_margin_px: f32,
    pub anticipation: Duration,
    pub cooldown: Duration,
}

impl Default for RelocationParams {
    fn default() -> Self {
        Self {
            proximity_px: EVADE_PROXIMITY_PX,
            padding_px: EVADE_EDGE_PADDING_PX,
            exclusion_radius_px: EVADE_CENTER_EXCLUSION_PX,
            exclusion_margin_px: EVADE_EXCLUSION_MARGIN_PX,
            anticipation: EVADE_ANTICIPATION,
            cooldown: EVADE_COOLDOWN,
        }
    }
}

/// Inclusive range of valid control centers for a control of `size`.
///
/// The upper bound never drops below `min + 1`, so a control larger than the
/// viewport still gets a (tiny) valid range anchored at the top-left.
pub fn padded_bounds(viewport: Viewport, size: Vec2, padding: f32) -> (Vec2, Vec2) {
    let min = Vec2::new(padding + size.x * 0.5, padding + size.y * 0.5);
    let max = Vec2::new(
        (viewport.width - padding - size.x * 0.5).max(min.x + 1.0),
        (viewport.height - padding - size.y * 0.5).max(min.y + 1.0),
    );
    (min, max)
}

/// Push `point` radially out of the exclusion disc around `center`.
///
/// Points already outside the radius are returned unchanged. Points inside
/// land at `radius + margin` along the same angle; the exact center has no
/// angle and is pushed along +x.
pub fn push_out_of_center(point: Vec2, center: Vec2, radius: f32, margin: f32) -> Vec2 {
    let delta = point - center;
    if delta.length() >= radius {
        return point;
    }
    let angle = delta.y.atan2(delta.x);
    center + Vec2::new(angle.cos(), angle.sin()) * (radius + margin)
}

/// Pick the next on-screen center for a control of `size`.
pub fn pick_target<R: Rng + ?Sized>(
    rng: &mut R,
    viewport: Viewport,
    size: Vec2,
    params: &RelocationParams,
) -> Vec2 {
    let (min, max) = padded_bounds(viewport, size, params.padding_px);
    let raw = Vec2::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y));
    let pushed = push_out_of_center(
        raw,
        viewport.center(),
        params.exclusion_radius_px,
        params.exclusion_margin_px,
    );
    pushed.clamp(min, max)
}

/// Where a relocation stands. Triggers are only accepted in `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelocationPhase {
    Idle,
    /// Shrunk in anticipation; the jump happens once the anticipation delay elapses.
    Anticipating { since: Duration },
    /// Just landed and popped; proximity detection re-arms after the cooldown.
    Settling { since: Duration },
}

/// Observable outcome of driving the control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EvasiveEvent {
    Anticipating,
    Relocated { position: Vec2, counter: usize },
    Rearmed,
}

/// Visual state derived from the relocation phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlPose {
    Rest,
    Shrunk,
    Popped,
}

/// The "no" control that keeps jumping away from the pointer.
pub struct EvasiveControl {
    params: RelocationParams,
    phase: RelocationPhase,
    position: Option<Vec2>,
    counter: usize,
    message_count: usize,
}

impl EvasiveControl {
    pub fn new(message_count: usize) -> Self {
        Self::with_params(message_count, RelocationParams::default())
    }

    pub fn with_params(message_count: usize, params: RelocationParams) -> Self {
        Self {
            params,
            phase: RelocationPhase::Idle,
            position: None,
            counter: 0,
            message_count: message_count.max(1),
        }
    }

    pub fn phase(&self) -> RelocationPhase {
        self.phase
    }

    /// Fixed center coordinate, or `None` while the control sits in its natural layout slot.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn pose(&self) -> ControlPose {
        match self.phase {
            RelocationPhase::Idle => ControlPose::Rest,
            RelocationPhase::Anticipating { .. } => ControlPose::Shrunk,
            RelocationPhase::Settling { .. } => ControlPose::Popped,
        }
    }

    #[inline]
    pub fn is_near(&self, pointer_px: Vec2, rect: &ControlRect) -> bool {
        pointer_px.distance(rect.center) < self.params.proximity_px
    }

    /// Start a relocation if idle. Returns `None` while one is already in flight.
    pub fn trigger(&mut self, now: Duration) -> Option<EvasiveEvent> {
        match self.phase {
            RelocationPhase::Idle => {
                self.phase = RelocationPhase::Anticipating { since: now };
                Some(EvasiveEvent::Anticipating)
            }
            _ => None,
        }
    }

    pub fn on_pointer_move(
        &mut self,
        now: Duration,
        pointer_px: Vec2,
        rect: &ControlRect,
    ) -> Option<EvasiveEvent> {
        if self.phase != RelocationPhase::Idle || !self.is_near(pointer_px, rect) {
            return None;
        }
        self.trigger(now)
    }

    /// Advance timed transitions, pushing any resulting events into `out_events`.
    ///
    /// `size` is the measured control size; `None` or a zero size falls back to
    /// the nominal button dimensions.
    pub fn poll<R: Rng + ?Sized>(
        &mut self,
        now: Duration,
        rng: &mut R,
        viewport: Viewport,
        size: Option<Vec2>,
        out_events: &mut Vec<EvasiveEvent>,
    ) {
        loop {
            match self.phase {
                RelocationPhase::Anticipating { since } if now >= since + self.params.anticipation => {
                    let size = measured_or_fallback(size);
                    let position = pick_target(rng, viewport, size, &self.params);
                    self.position = Some(position);
                    self.counter = (self.counter + 1) % self.message_count;
                    self.phase = RelocationPhase::Settling { since: now };
                    log::debug!(
                        "[evasive] relocated to ({:.0},{:.0}) counter={}",
                        position.x,
                        position.y,
                        self.counter
                    );
                    out_events.push(EvasiveEvent::Relocated {
                        position,
                        counter: self.counter,
                    });
                }
                RelocationPhase::Settling { since } if now >= since + self.params.cooldown => {
                    self.phase = RelocationPhase::Idle;
                    out_events.push(EvasiveEvent::Rearmed);
                }
                _ => break,
            }
        }
    }

    /// Back to the natural layout slot with the first message.
    pub fn reset(&mut self) {
        self.phase = RelocationPhase::Idle;
        self.position = None;
        self.counter = 0;
    }
}

#[inline]
fn measured_or_fallback(size: Option<Vec2>) -> Vec2 {
    match size {
        Some(s) if s.x > 0.0 && s.y > 0.0 => s,
        _ => Vec2::new(EVADE_FALLBACK_WIDTH_PX, EVADE_FALLBACK_HEIGHT_PX),
    }
}

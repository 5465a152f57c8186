use super::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

/// One heart of the acceptance burst.
///
/// Fields:
/// - `offset_px`: final displacement from the burst origin
/// - `rotation_deg`: spin applied over the flight
/// - `scale`: size multiplier
/// - `color`: CSS color from `CELEBRATION_PALETTE`
#[derive(Clone, Debug, PartialEq)]
pub struct CelebrationParticle {
    pub id: u64,
    pub offset_px: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub color: &'static str,
}

/// Generate a full burst with ids starting at `first_id`.
pub fn burst<R: Rng + ?Sized>(rng: &mut R, first_id: u64) -> Vec<CelebrationParticle> {
    (0..CELEBRATION_PARTICLE_COUNT)
        .map(|i| {
            let angle = rng.gen_range(0.0..TAU);
            let distance = CELEBRATION_DISTANCE_MIN_PX + rng.gen_range(0.0..CELEBRATION_DISTANCE_SPAN_PX);
            let rotation_deg =
                rng.gen_range(-CELEBRATION_ROTATION_SPAN_DEG..CELEBRATION_ROTATION_SPAN_DEG);
            let scale = CELEBRATION_SCALE_MIN + rng.gen_range(0.0..CELEBRATION_SCALE_SPAN);
            let color = CELEBRATION_PALETTE[rng.gen_range(0..CELEBRATION_PALETTE.len())];
            CelebrationParticle {
                id: first_id + i as u64,
                offset_px: Vec2::new(angle.cos(), angle.sin()) * distance,
                rotation_deg,
                scale,
                color,
            }
        })
        .collect()
}

/// Holds at most one live burst. A new emission replaces the old batch and
/// the whole batch disappears together once its lifetime is over.
#[derive(Default)]
pub struct CelebrationEmitter {
    particles: Vec<CelebrationParticle>,
    expires_at: Option<Duration>,
    batch: u64,
}

impl CelebrationEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) -> &[CelebrationParticle] {
        self.batch += 1;
        let first_id = self.batch * CELEBRATION_PARTICLE_COUNT as u64;
        self.particles = burst(rng, first_id);
        self.expires_at = Some(now + CELEBRATION_LIFETIME);
        &self.particles
    }

    /// Drop the batch if it has expired. Returns true when something was cleared.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.expires_at {
            Some(at) if now >= at => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.expires_at = None;
    }

    pub fn particles(&self) -> &[CelebrationParticle] {
        &self.particles
    }

    /// Identifier of the live batch, if any. Changes with every emission.
    pub fn live_batch(&self) -> Option<u64> {
        (!self.particles.is_empty()).then_some(self.batch)
    }
}

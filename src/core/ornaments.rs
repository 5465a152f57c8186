use super::constants::*;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

/// A single heart drifting up through the background.
///
/// Fields:
/// - `id`: creation timestamp in milliseconds, unique within its field
/// - `left_pct`: horizontal anchor as a percentage of the viewport width
/// - `size_px`: glyph size
/// - `lifetime`: time to travel from below the viewport to above it
/// - `spawned_at`: page-session time of creation
#[derive(Clone, Debug, PartialEq)]
pub struct Ornament {
    pub id: u64,
    pub left_pct: f32,
    pub size_px: f32,
    pub lifetime: Duration,
    pub spawned_at: Duration,
}

impl Ornament {
    #[inline]
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.spawned_at)
    }

    /// Fraction of the lifetime elapsed; exceeds 1.0 once expired.
    #[inline]
    pub fn progress(&self, now: Duration) -> f32 {
        let lifetime = self.lifetime.as_secs_f32();
        if lifetime <= 0.0 {
            return 1.0;
        }
        self.age(now).as_secs_f32() / lifetime
    }

    #[inline]
    pub fn position_pct(&self, now: Duration) -> Vec2 {
        let y = ORNAMENT_START_Y_PCT - self.progress(now) * ORNAMENT_TRAVEL_Y_PCT;
        Vec2::new(self.left_pct, y)
    }

    #[inline]
    pub fn is_expired(&self, now: Duration) -> bool {
        self.age(now) >= self.lifetime
    }
}

/// Outward push (in px) applied to an ornament near the pointer.
///
/// Linear falloff from `REPULSION_MAX_PUSH_PX` at the pointer to zero at the
/// threshold. At exactly the threshold and beyond there is no effect. A
/// pointer sitting exactly on the ornament has no direction and yields zero.
pub fn repulsion(ornament_pct: Vec2, pointer_pct: Vec2) -> Vec2 {
    let delta = ornament_pct - pointer_pct;
    let distance = delta.length();
    if distance >= REPULSION_THRESHOLD_PCT || distance <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let power = (REPULSION_THRESHOLD_PCT - distance) / REPULSION_THRESHOLD_PCT;
    delta / distance * (power * REPULSION_MAX_PUSH_PX)
}

/// Per-frame render data for one ornament.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentFrame {
    pub id: u64,
    pub position_pct: Vec2,
    pub size_px: f32,
    pub offset_px: Vec2,
}

/// Bounded set of live ornaments plus the deadlines of its two periodic tasks.
///
/// Typical usage:
/// - Construct with `OrnamentField::new(now)` when the asking view mounts
/// - Call `tick(now, rng)` every frame; spawning and cleanup run when due
/// - Call `frame(now, pointer_pct)` to get positions and repulsion offsets
///
/// Dropping the field stops both tasks.
pub struct OrnamentField {
    ornaments: SmallVec<[Ornament; ORNAMENT_MAX_LIVE]>,
    next_spawn: Duration,
    next_cleanup: Duration,
    last_id: Option<u64>,
}

impl OrnamentField {
    pub fn new(mounted_at: Duration) -> Self {
        Self {
            ornaments: SmallVec::new(),
            next_spawn: mounted_at + ORNAMENT_SPAWN_INTERVAL,
            next_cleanup: mounted_at + ORNAMENT_CLEANUP_INTERVAL,
            last_id: None,
        }
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    pub fn len(&self) -> usize {
        self.ornaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ornaments.is_empty()
    }

    /// Append one randomized ornament, keeping only the most recent ones.
    pub fn spawn<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) -> &Ornament {
        let mut id = now.as_millis() as u64;
        if let Some(last) = self.last_id {
            if id <= last {
                id = last + 1;
            }
        }
        self.last_id = Some(id);

        let lifetime_sec = rng.gen_range(ORNAMENT_LIFETIME_MIN_SEC..ORNAMENT_LIFETIME_MAX_SEC);
        let ornament = Ornament {
            id,
            left_pct: rng.gen_range(0.0..100.0),
            size_px: rng.gen_range(ORNAMENT_SIZE_MIN_PX..ORNAMENT_SIZE_MAX_PX),
            lifetime: Duration::from_secs_f32(lifetime_sec),
            spawned_at: now,
        };

        if self.ornaments.len() > ORNAMENT_KEEP_RECENT {
            let excess = self.ornaments.len() - ORNAMENT_KEEP_RECENT;
            self.ornaments.drain(..excess);
        }
        self.ornaments.push(ornament);
        &self.ornaments[self.ornaments.len() - 1]
    }

    /// Remove ornaments that finished their trip. Returns how many were removed.
    pub fn cleanup(&mut self, now: Duration) -> usize {
        let before = self.ornaments.len();
        self.ornaments.retain(|o| !o.is_expired(now));
        before - self.ornaments.len()
    }

    /// Run whichever periodic task is due. A late tick runs each task once
    /// rather than catching up on every missed interval.
    pub fn tick<R: Rng + ?Sized>(&mut self, now: Duration, rng: &mut R) {
        if now >= self.next_spawn {
            self.spawn(now, rng);
            self.next_spawn = now + ORNAMENT_SPAWN_INTERVAL;
        }
        if now >= self.next_cleanup {
            self.cleanup(now);
            self.next_cleanup = now + ORNAMENT_CLEANUP_INTERVAL;
        }
    }

    pub fn frame(&self, now: Duration, pointer_pct: Vec2) -> impl Iterator<Item = OrnamentFrame> + '_ {
        self.ornaments.iter().map(move |o| {
            let position_pct = o.position_pct(now);
            OrnamentFrame {
                id: o.id,
                position_pct,
                size_px: o.size_px,
                offset_px: repulsion(position_pct, pointer_pct),
            }
        })
    }
}

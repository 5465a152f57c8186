// Host-side tests for the floating ornament field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod ornaments {
    include!("../src/core/ornaments.rs");
}

use constants::*;
use glam::Vec2;
use ornaments::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn ornament(lifetime_sec: u64) -> Ornament {
    Ornament {
        id: 1,
        left_pct: 50.0,
        size_px: 20.0,
        lifetime: Duration::from_secs(lifetime_sec),
        spawned_at: Duration::ZERO,
    }
}

#[test]
fn field_never_exceeds_cap_after_spawn() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = OrnamentField::new(Duration::ZERO);
    for i in 0..100 {
        field.spawn(ms(i * 600), &mut rng);
        assert!(field.len() <= ORNAMENT_MAX_LIVE, "len {} after spawn {}", field.len(), i);
    }
    assert_eq!(field.len(), ORNAMENT_MAX_LIVE);
}

#[test]
fn trimming_keeps_the_most_recent() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = OrnamentField::new(Duration::ZERO);
    for i in 0..40 {
        field.spawn(ms(i * 600), &mut rng);
    }
    let ids: Vec<u64> = field.ornaments().iter().map(|o| o.id).collect();
    assert_eq!(*ids.last().unwrap(), 39 * 600);
    assert_eq!(ids[0], (40 - ORNAMENT_MAX_LIVE as u64) * 600);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn spawned_ornaments_are_within_ranges() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = OrnamentField::new(Duration::ZERO);
    for i in 0..200 {
        let o = field.spawn(ms(i), &mut rng).clone();
        assert!((0.0..100.0).contains(&o.left_pct));
        assert!((ORNAMENT_SIZE_MIN_PX..ORNAMENT_SIZE_MAX_PX).contains(&o.size_px));
        let life = o.lifetime.as_secs_f32();
        assert!(life >= ORNAMENT_LIFETIME_MIN_SEC - 1e-3 && life <= ORNAMENT_LIFETIME_MAX_SEC + 1e-3);
    }
}

#[test]
fn ids_stay_unique_within_the_same_millisecond() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = OrnamentField::new(Duration::ZERO);
    field.spawn(ms(1000), &mut rng);
    field.spawn(ms(1000), &mut rng);
    field.spawn(ms(1000), &mut rng);
    let ids: Vec<u64> = field.ornaments().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![1000, 1001, 1002]);
}

#[test]
fn cleanup_removes_only_expired() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = OrnamentField::new(Duration::ZERO);
    for _ in 0..10 {
        field.spawn(Duration::ZERO, &mut rng);
    }
    // every lifetime is at least five seconds
    assert_eq!(field.cleanup(ms(4_900)), 0);
    assert_eq!(field.len(), 10);
    // and at most ten
    assert_eq!(field.cleanup(ms(10_000)), 10);
    assert!(field.is_empty());
}

#[test]
fn tick_runs_spawn_and_cleanup_on_their_intervals() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = OrnamentField::new(Duration::ZERO);
    field.tick(ms(599), &mut rng);
    assert_eq!(field.len(), 0);
    field.tick(ms(600), &mut rng);
    assert_eq!(field.len(), 1);
    field.tick(ms(1_199), &mut rng);
    assert_eq!(field.len(), 1);
    field.tick(ms(1_200), &mut rng);
    assert_eq!(field.len(), 2);

    // simulate a minute of 16ms frames: the cap holds throughout
    let mut t = 1_200;
    while t < 60_000 {
        t += 16;
        field.tick(ms(t), &mut rng);
        assert!(field.len() <= ORNAMENT_MAX_LIVE);
    }
    // with 5-10s lifetimes and a 600ms cadence, cleanup keeps the field below the cap
    assert!(field.len() < ORNAMENT_MAX_LIVE);
    assert!(field.ornaments().iter().all(|o| o.age(ms(t)) < o.lifetime + ORNAMENT_CLEANUP_INTERVAL));
}

#[test]
fn a_late_tick_spawns_once() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = OrnamentField::new(Duration::ZERO);
    field.tick(ms(5_000), &mut rng);
    assert_eq!(field.len(), 1);
}

#[test]
fn vertical_travel_is_linear_from_below_to_above() {
    let o = ornament(10);
    assert_eq!(o.position_pct(Duration::ZERO), Vec2::new(50.0, 105.0));
    assert!((o.position_pct(ms(5_000)).y - 47.5).abs() < 1e-4);
    assert!((o.position_pct(ms(10_000)).y + 10.0).abs() < 1e-4);
    assert!(!o.is_expired(ms(9_999)));
    assert!(o.is_expired(ms(10_000)));
}

#[test]
fn repulsion_pushes_outward_with_linear_falloff() {
    let pointer = Vec2::new(50.0, 50.0);
    let d = repulsion(Vec2::new(55.0, 50.0), pointer);
    // (15 - 5) / 15 * 25
    assert!((d.x - 16.666_666).abs() < 1e-3);
    assert_eq!(d.y, 0.0);

    let up = repulsion(Vec2::new(50.0, 47.0), pointer);
    assert!(up.y < 0.0 && up.x.abs() < 1e-6);

    let near_edge = repulsion(Vec2::new(64.9, 50.0), pointer);
    assert!(near_edge.x > 0.0 && near_edge.x < 0.2);
}

#[test]
fn repulsion_is_zero_at_and_beyond_threshold() {
    let pointer = Vec2::new(20.0, 20.0);
    assert_eq!(repulsion(Vec2::new(35.0, 20.0), pointer), Vec2::ZERO);
    assert_eq!(repulsion(Vec2::new(80.0, 90.0), pointer), Vec2::ZERO);
}

#[test]
fn repulsion_with_pointer_on_top_is_zero() {
    let p = Vec2::new(42.0, 42.0);
    assert_eq!(repulsion(p, p), Vec2::ZERO);
}

#[test]
fn frame_without_pointer_has_no_offsets() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = OrnamentField::new(Duration::ZERO);
    for i in 0..5 {
        field.spawn(ms(i * 100), &mut rng);
    }
    let offscreen = Vec2::splat(POINTER_OFFSCREEN);
    let frames: Vec<OrnamentFrame> = field.frame(ms(1_000), offscreen).collect();
    assert_eq!(frames.len(), 5);
    assert!(frames.iter().all(|f| f.offset_px == Vec2::ZERO));
}

#[test]
fn frame_repels_ornaments_near_pointer() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut field = OrnamentField::new(Duration::ZERO);
    let o = field.spawn(Duration::ZERO, &mut rng).clone();
    let now = ms(2_000);
    let pos = o.position_pct(now);
    let pointer = pos - Vec2::new(3.0, 0.0);
    let frame = field.frame(now, pointer).next().unwrap();
    assert_eq!(frame.id, o.id);
    assert!(frame.offset_px.x > 0.0);
}

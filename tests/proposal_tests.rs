// Host-side end-to-end tests for the proposal root and its message provider.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod ornaments {
    include!("../src/core/ornaments.rs");
}
mod evasive {
    include!("../src/core/evasive.rs");
}
mod celebration {
    include!("../src/core/celebration.rs");
}
mod messages {
    include!("../src/core/messages.rs");
}
mod tones {
    include!("../src/core/tones.rs");
}
mod proposal {
    include!("../src/core/proposal.rs");
}

use glam::Vec2;
use messages::*;
use pointer::{ControlRect, Viewport};
use proposal::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::Duration;
use tones::Tone;

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn control_rect(p: &Proposal) -> ControlRect {
    let center = p
        .asking()
        .and_then(|s| s.evasive.position())
        .unwrap_or(Vec2::new(760.0, 520.0));
    ControlRect {
        center,
        size: Vec2::new(140.0, 60.0),
    }
}

/// Move the pointer onto the control and run frames until it re-arms.
fn dodge(p: &mut Proposal, start: Duration) -> Duration {
    let mut cues = Vec::new();
    let rect = control_rect(p);
    p.pointer_moved(start, rect.center + Vec2::new(20.0, 0.0), VIEWPORT, Some(&rect), &mut cues);
    let mut t = start;
    while t < start + ms(340) {
        t += ms(16);
        p.tick(t, VIEWPORT, Some(rect.size), &mut cues);
    }
    t
}

#[test]
fn starts_awaiting_with_rest_state() {
    let p = Proposal::new(Duration::ZERO, 1);
    assert_eq!(p.phase(), Phase::AwaitingResponse);
    assert_eq!(p.accept_scale(), 1.0);
    let scene = p.asking().unwrap();
    assert_eq!(scene.evasive.position(), None);
    assert_eq!(scene.evasive.counter(), 0);
    assert!(p.accepted().is_none());
}

#[test]
fn accepting_celebrates_and_chimes_once() {
    let mut p = Proposal::new(Duration::ZERO, 7);
    let mut cues = Vec::new();
    p.accept(ms(1_000), &mut cues);

    assert_eq!(p.phase(), Phase::Accepted);
    let chimes = cues.iter().filter(|c| **c == Cue::Tone(Tone::Chime)).count();
    assert_eq!(chimes, 1);
    assert!(cues.contains(&Cue::Tone(Tone::Pop)));
    assert!(cues.contains(&Cue::InitMusic));
    assert!(cues.iter().any(|c| matches!(c, Cue::FetchMessage { .. })));

    let scene = p.accepted().unwrap();
    assert_eq!(scene.celebration.particles().len(), 80);
    assert!(matches!(scene.message, MessageState::Loading { .. }));

    p.tick(ms(3_999), VIEWPORT, None, &mut cues);
    assert_eq!(p.accepted().unwrap().celebration.particles().len(), 80);
    p.tick(ms(4_000), VIEWPORT, None, &mut cues);
    assert!(p.accepted().unwrap().celebration.particles().is_empty());
}

#[test]
fn accepting_twice_is_ignored() {
    let mut p = Proposal::new(Duration::ZERO, 7);
    let mut cues = Vec::new();
    p.accept(ms(0), &mut cues);
    cues.clear();
    p.accept(ms(100), &mut cues);
    assert!(cues.is_empty());
}

#[test]
fn nearby_pointer_relocates_within_window() {
    let mut p = Proposal::new(Duration::ZERO, 11);
    let mut cues = Vec::new();
    let rect = control_rect(&p);
    let before = p.asking().unwrap().evasive.position();

    p.pointer_moved(ms(500), rect.center + Vec2::new(100.0, 50.0), VIEWPORT, Some(&rect), &mut cues);
    assert_eq!(cues, vec![Cue::Tone(Tone::Jingle)]);

    p.tick(ms(580), VIEWPORT, Some(rect.size), &mut cues);
    let scene = p.asking().unwrap();
    assert_ne!(scene.evasive.position(), before);
    assert_eq!(scene.evasive.counter(), 1);
    assert!((scene.accept_scale - 1.15).abs() < 1e-6);
    assert!(cues.contains(&Cue::InitMusic));

    // further movement during the cooldown does nothing
    cues.clear();
    let rect = control_rect(&p);
    p.pointer_moved(ms(700), rect.center, VIEWPORT, Some(&rect), &mut cues);
    p.tick(ms(800), VIEWPORT, Some(rect.size), &mut cues);
    assert!(cues.is_empty());
    assert_eq!(p.asking().unwrap().evasive.counter(), 1);
}

#[test]
fn distant_pointer_leaves_control_alone() {
    let mut p = Proposal::new(Duration::ZERO, 11);
    let mut cues = Vec::new();
    let rect = control_rect(&p);
    p.pointer_moved(ms(10), rect.center + Vec2::new(300.0, 0.0), VIEWPORT, Some(&rect), &mut cues);
    p.tick(ms(500), VIEWPORT, Some(rect.size), &mut cues);
    assert!(cues.is_empty());
    assert_eq!(p.asking().unwrap().evasive.position(), None);
}

#[test]
fn touching_the_control_also_relocates() {
    let mut p = Proposal::new(Duration::ZERO, 5);
    let mut cues = Vec::new();
    p.control_touched(ms(100), &mut cues);
    p.control_touched(ms(120), &mut cues);
    assert_eq!(cues, vec![Cue::Tone(Tone::Jingle)]);
    p.tick(ms(180), VIEWPORT, None, &mut cues);
    assert_eq!(p.asking().unwrap().evasive.counter(), 1);
}

#[test]
fn accept_control_growth_caps_at_three() {
    let mut p = Proposal::new(Duration::ZERO, 21);
    let mut t = Duration::ZERO;
    for _ in 0..20 {
        t = dodge(&mut p, t);
    }
    assert_eq!(p.asking().unwrap().evasive.counter(), 20);
    assert!((p.accept_scale() - 3.0).abs() < 1e-6);
}

#[test]
fn relocated_control_stays_visible_and_off_center() {
    let mut p = Proposal::new(Duration::ZERO, 33);
    let mut t = Duration::ZERO;
    for _ in 0..50 {
        t = dodge(&mut p, t);
        let pos = p.asking().unwrap().evasive.position().unwrap();
        assert!(pos.x >= 110.0 && pos.x <= 1_170.0);
        assert!(pos.y >= 70.0 && pos.y <= 730.0);
        assert!(pos.distance(VIEWPORT.center()) >= 300.0 - 1e-3);
    }
}

#[test]
fn asking_again_resets_everything() {
    let mut p = Proposal::new(Duration::ZERO, 13);
    let mut t = dodge(&mut p, Duration::ZERO);
    t = dodge(&mut p, t);
    let mut cues = Vec::new();
    p.accept(t, &mut cues);
    p.ask_again(t + ms(500));

    assert_eq!(p.phase(), Phase::AwaitingResponse);
    assert_eq!(p.accept_scale(), 1.0);
    let scene = p.asking().unwrap();
    assert_eq!(scene.evasive.position(), None);
    assert_eq!(scene.evasive.counter(), 0);
    assert!(scene.field.is_empty());
    assert!(p.accepted().is_none());
}

#[test]
fn ornaments_only_run_while_asking() {
    let mut p = Proposal::new(Duration::ZERO, 2);
    let mut cues = Vec::new();
    for i in 1..=10 {
        p.tick(ms(i * 600), VIEWPORT, None, &mut cues);
    }
    assert_eq!(p.asking().unwrap().field.len(), 10);
    p.accept(ms(6_100), &mut cues);
    p.ask_again(ms(6_200));
    assert!(p.asking().unwrap().field.is_empty());
}

#[test]
fn message_delivery_respects_tickets() {
    let mut p = Proposal::new(Duration::ZERO, 3);
    let mut cues = Vec::new();
    p.accept(ms(0), &mut cues);
    let first = cues
        .iter()
        .find_map(|c| match c {
            Cue::FetchMessage { ticket } => Some(*ticket),
            _ => None,
        })
        .unwrap();

    p.ask_again(ms(100));
    cues.clear();
    p.accept(ms(200), &mut cues);

    assert!(!p.message_ready(first, "stale".into()));
    let second = first + 1;
    assert!(p.message_ready(second, "fresh".into()));
    assert_eq!(
        p.accepted().unwrap().message,
        MessageState::Ready("fresh".into())
    );
    assert!(!p.message_ready(second, "again".into()));
}

#[test]
fn seal_pops_only_after_acceptance() {
    let mut p = Proposal::new(Duration::ZERO, 3);
    let mut cues = Vec::new();
    p.seal_clicked(&mut cues);
    assert!(cues.is_empty());
    p.accept(ms(0), &mut cues);
    cues.clear();
    p.seal_clicked(&mut cues);
    assert_eq!(cues, vec![Cue::Tone(Tone::Pop)]);
}

#[test]
fn pointer_position_is_tracked_in_percent() {
    let mut p = Proposal::new(Duration::ZERO, 3);
    assert_eq!(p.pointer().pct, Vec2::splat(-1000.0));
    let mut cues = Vec::new();
    p.pointer_moved(ms(0), Vec2::new(640.0, 200.0), VIEWPORT, None, &mut cues);
    assert_eq!(p.pointer().pct, Vec2::new(50.0, 25.0));
}

#[test]
fn taunts_cycle_with_ghost_badges() {
    assert_eq!(TAUNTS.len(), 31);
    assert_eq!(taunt_for(0), "No");
    assert_eq!(taunt_for(31), "No");
    assert!(!shows_ghost(0));
    assert!(shows_ghost(4));
    assert!(!shows_ghost(5));
    assert!(shows_ghost(28));
}

struct Broken;

impl MessageSource for Broken {
    fn compose(&self, _name: &str, _rng: &mut dyn RngCore) -> Result<String, MessageError> {
        Err(MessageError::Unavailable("offline".into()))
    }
}

struct Blank;

impl MessageSource for Blank {
    fn compose(&self, _name: &str, _rng: &mut dyn RngCore) -> Result<String, MessageError> {
        Ok("   ".into())
    }
}

#[test]
fn prewritten_messages_come_from_the_list() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        let m = message_or_fallback(&PrewrittenMessages, "My Love", &mut rng);
        assert!(ROMANTIC_MESSAGES.contains(&m.as_str()));
    }
}

#[test]
fn failing_sources_fall_back() {
    let mut rng = StdRng::seed_from_u64(9);
    assert_eq!(message_or_fallback(&Broken, "My Love", &mut rng), FALLBACK_MESSAGE);
    assert_eq!(message_or_fallback(&Blank, "My Love", &mut rng), FALLBACK_MESSAGE);
    assert!(!FALLBACK_MESSAGE.is_empty());
}

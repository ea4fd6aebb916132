//! End-to-end feedback scenarios on a fully simulated clock.
//!
//! Each test builds a context with recording device endpoints, scripts a
//! run frame by frame, and asserts on what actually reached the devices
//! and the render-facing registries.

use verve::core::math::Vec2;
use verve::effects::EffectKind;
use verve::feedback::{RecordingAudio, RecordingVibrator, SoundCue};
use verve::particles::{ParticlePool, ParticleSeed};
use verve::session::MemoryScoreStore;
use verve::{EffectOverrides, JuiceConfig, JuiceContext};

const DT: f32 = 1.0 / 60.0;

struct Harness {
    ctx: JuiceContext,
    vibrator: RecordingVibrator,
    audio: RecordingAudio,
}

fn harness_with_store(store: MemoryScoreStore) -> Harness {
    let vibrator = RecordingVibrator::default();
    let audio = RecordingAudio::default();
    let ctx = JuiceContext::new(
        JuiceConfig {
            game_id: "flow-test".to_owned(),
            ..JuiceConfig::default()
        },
        1234,
        Box::new(store),
        Box::new(vibrator.clone()),
        Box::new(audio.clone()),
    );
    Harness { ctx, vibrator, audio }
}

fn harness() -> Harness {
    harness_with_store(MemoryScoreStore::new())
}

fn run_frames(ctx: &mut JuiceContext, frames: u32) {
    for _ in 0..frames {
        ctx.tick(DT);
    }
}

#[test]
fn test_combo_escalation_reaches_middle_tier() {
    let mut h = harness();
    h.ctx.start();

    for _ in 0..4 {
        h.ctx.increment_combo(Vec2::new(100.0, 100.0));
    }
    run_frames(&mut h.ctx, 1);

    assert_eq!(h.ctx.session().combo(), 4);
    // the fourth increment crossed into the middle tier
    assert!(h.audio.played().contains(&SoundCue::ComboMid));
    // combo-2 haptic pattern at full intensity
    assert!(h.vibrator.calls().contains(&vec![15, 30, 15]));
}

#[test]
fn test_score_multiplier_at_combo_three() {
    let mut h = harness();
    h.ctx.start();

    for _ in 0..3 {
        h.ctx.increment_combo(Vec2::ZERO);
    }
    h.ctx.add_score(100, Vec2::ZERO);
    run_frames(&mut h.ctx, 1);

    assert_eq!(h.ctx.session().score(), 130);
}

#[test]
fn test_high_score_written_exactly_once() {
    let mut store = MemoryScoreStore::new();
    store.insert_raw("flow-test", "200");

    let mut h = harness_with_store(store);
    h.ctx.start();
    h.ctx.add_score(500, Vec2::ZERO);
    run_frames(&mut h.ctx, 1);

    let summary = h.ctx.end().expect("session was playing");
    assert!(summary.is_high_score);
    assert_eq!(summary.currency_earned, 500 / 10 + 50);

    // a second end is a no-op
    assert!(h.ctx.end().is_none());
}

#[test]
fn test_run_below_record_is_not_a_high_score() {
    let mut store = MemoryScoreStore::new();
    store.insert_raw("flow-test", "10000");

    let mut h = harness_with_store(store);
    h.ctx.start();
    h.ctx.add_score(500, Vec2::ZERO);
    run_frames(&mut h.ctx, 1);

    let summary = h.ctx.end().expect("session was playing");
    assert!(!summary.is_high_score);
    assert_eq!(summary.currency_earned, 50);
    assert!(!h.audio.played().contains(&SoundCue::HighScore));
}

#[test]
fn test_effect_expires_after_its_duration() {
    let mut h = harness();
    h.ctx.trigger(
        EffectKind::Flash,
        EffectOverrides {
            duration_ms: Some(500.0),
            ..EffectOverrides::default()
        },
    );
    assert_eq!(h.ctx.orchestrator().active_count(), 1);

    // 500ms at 60fps is 30 frames; run a few extra for float headroom
    run_frames(&mut h.ctx, 33);
    assert_eq!(h.ctx.orchestrator().active_count(), 0);
}

#[test]
fn test_pool_exhaustion_drops_the_sixth_spawn() {
    let mut pool = ParticlePool::new(5);
    let seed = ParticleSeed::default();

    for _ in 0..5 {
        assert!(pool.spawn(&seed).is_some());
    }
    assert!(pool.spawn(&seed).is_none());
    assert_eq!(pool.active_count(), 5);
    assert_eq!(pool.dropped_count(), 1);
}

#[test]
fn test_combo_decays_on_simulated_clock() {
    let mut h = harness();
    h.ctx.start();
    h.ctx.increment_combo(Vec2::ZERO);
    assert_eq!(h.ctx.session().combo(), 1);

    // default window is 3000ms; 4 simulated seconds must clear it
    run_frames(&mut h.ctx, 240);
    assert_eq!(h.ctx.session().combo(), 0);
    assert!(!h.ctx.session().has_armed_timers());
}

#[test]
fn test_teardown_leaves_nothing_armed_or_live() {
    let mut h = harness();
    h.ctx.start();
    h.ctx.increment_combo(Vec2::new(10.0, 10.0));
    h.ctx.add_score(100, Vec2::new(10.0, 10.0));
    run_frames(&mut h.ctx, 5);

    h.ctx.teardown();
    assert_eq!(h.ctx.orchestrator().active_count(), 0);
    assert_eq!(h.ctx.particles().active_count(), 0);
    assert!(!h.ctx.session().has_armed_timers());
}

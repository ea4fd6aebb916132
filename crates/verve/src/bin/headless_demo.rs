//! # Headless Demo
//!
//! Scripts a full session against the engine with no renderer attached:
//!
//! Start → Score → Combo chain → Miss → Comeback → Game Over
//!
//! Every frame is a simulated 60 fps tick; the run is deterministic for a
//! given seed. Prints per-phase state and the final settlement.

use verve::core::math::Vec2;
use verve::feedback::{NullVibrator, RecordingAudio};
use verve::session::{MemoryScoreStore, ScoreStore};
use verve::{JuiceConfig, JuiceContext};

/// One simulated frame at 60 fps.
const DT: f32 = 1.0 / 60.0;

/// Advances the context by `frames` simulated frames.
fn run_frames(ctx: &mut JuiceContext, frames: u32) {
    for _ in 0..frames {
        ctx.tick(DT);
    }
}

fn phase(ctx: &JuiceContext, label: &str) {
    println!(
        "│ {:<18} score {:>6}  combo {:>2}  effects {:>2}  particles {:>4} ",
        label,
        ctx.session().score(),
        ctx.session().combo(),
        ctx.orchestrator().active_count(),
        ctx.particles().active_count(),
    );
}

fn main() {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                  VERVE HEADLESS DEMO                         ║");
    println!("║        Start → Score → Combo → Miss → Game Over              ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut store = MemoryScoreStore::new();
    // An existing record to beat
    store.set("demo", 500).expect("memory store never fails");

    let audio = RecordingAudio::default();
    let mut ctx = JuiceContext::new(
        JuiceConfig {
            game_id: "demo".to_owned(),
            ..JuiceConfig::default()
        },
        0xBEEF,
        Box::new(store),
        Box::new(NullVibrator),
        Box::new(audio.clone()),
    );

    ctx.start();

    println!("┌─ RUN ─────────────────────────────────────────────────────────┐");

    // Opening scores, no combo yet
    ctx.add_score(50, Vec2::new(200.0, 300.0));
    run_frames(&mut ctx, 10);
    phase(&ctx, "opening hit");

    // A combo chain: hit every 20 frames, well inside the 3s window
    for i in 0..5 {
        let at = Vec2::new(200.0 + i as f32 * 60.0, 300.0);
        ctx.increment_combo(at);
        ctx.add_score(100, at);
        run_frames(&mut ctx, 20);
    }
    phase(&ctx, "combo chain x5");

    // Crossing 500 points is a milestone
    ctx.milestone(ctx.session().score(), Vec2::new(400.0, 100.0));
    run_frames(&mut ctx, 20);
    phase(&ctx, "milestone");

    // A miss breaks the chain
    ctx.reset_combo();
    run_frames(&mut ctx, 30);
    phase(&ctx, "miss");

    // Comeback
    for _ in 0..2 {
        ctx.increment_combo(Vec2::new(400.0, 200.0));
        ctx.add_score(75, Vec2::new(400.0, 200.0));
        run_frames(&mut ctx, 15);
    }
    phase(&ctx, "comeback x2");

    // Let the last effects breathe, then settle
    run_frames(&mut ctx, 60);
    let summary = ctx.end().expect("session was playing");
    run_frames(&mut ctx, 30);
    phase(&ctx, "after game over");

    println!("└───────────────────────────────────────────────────────────────┘");
    println!();
    println!("┌─ SETTLEMENT ──────────────────────────────────────────────────┐");
    println!("│ Final Score:       {:>8}                                   ", summary.score);
    println!("│ Max Combo:         {:>8}                                   ", summary.max_combo);
    println!("│ Currency Earned:   {:>8}                                   ", summary.currency_earned);
    println!(
        "│ New High Score:    {:>8}                                   ",
        if summary.is_high_score { "YES" } else { "no" }
    );
    println!("│ Sound Cues Fired:  {:>8}                                   ", audio.played().len());
    println!("└───────────────────────────────────────────────────────────────┘");

    ctx.teardown();
    println!();
    println!("✅ DEMO COMPLETE");
}

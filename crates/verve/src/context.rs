//! The context object that owns every subsystem.
//!
//! There is no global state anywhere in the engine. A host constructs a
//! [`JuiceContext`], calls `tick(dt)` once per frame, and tears it down
//! when the screen goes away. Everything the subsystems need flows
//! through here.
//!
//! Tick order is fixed: session first (so this frame's events exist),
//! then effects (so fresh launches can be routed), then camera and
//! particles. Each subsystem is written exactly once per tick.

use tracing::trace;
use verve_camera::Camera;
use verve_core::math::Vec2;
use verve_core::rng::FxRng;
use verve_effects::{
    achievement_preset, combo_preset, game_over_preset, milestone_preset, AchievementRarity,
    EffectKind, EffectOverrides, EffectPayload, Intensity, Orchestrator,
};
use verve_feedback::{AudioSink, FeedbackDispatcher, Vibrator};
use verve_particles::{ParticleSystem, PresetTable};
use verve_session::{GameSession, ScoreStore, SessionEvent, SessionSummary};

/// Construction-time tuning for a [`JuiceContext`].
#[derive(Clone, Debug)]
pub struct JuiceConfig {
    /// Which game's high score the session competes against.
    pub game_id: String,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Particle pool capacity (also the eviction soft cap).
    pub particle_capacity: usize,
    /// Combo window in milliseconds.
    pub combo_window_ms: f32,
    /// Effect fidelity knob.
    pub intensity: Intensity,
}

impl Default for JuiceConfig {
    fn default() -> Self {
        Self {
            game_id: "default".to_owned(),
            viewport_width: 800.0,
            viewport_height: 600.0,
            particle_capacity: 512,
            combo_window_ms: 3000.0,
            intensity: Intensity::Medium,
        }
    }
}

/// Owns and coordinates every feedback subsystem.
pub struct JuiceContext {
    /// Seeded randomness for every spawner.
    rng: FxRng,
    /// Typed visual events.
    orchestrator: Orchestrator,
    /// Haptics and audio.
    feedback: FeedbackDispatcher,
    /// Pooled particle simulation.
    particles: ParticleSystem,
    /// Named particle presets.
    presets: PresetTable,
    /// Follow/zoom/shake camera.
    camera: Camera,
    /// Score, combo, lifecycle.
    session: GameSession,
    /// High-score persistence.
    store: Box<dyn ScoreStore + Send>,
    /// Viewport center, the fallback anchor for unanchored effects.
    center: Vec2,
}

impl JuiceContext {
    /// Wires up a context from a config, a seed, and the host's endpoints.
    #[must_use]
    pub fn new(
        config: JuiceConfig,
        seed: u64,
        store: Box<dyn ScoreStore + Send>,
        vibrator: Box<dyn Vibrator + Send>,
        audio: Box<dyn AudioSink + Send>,
    ) -> Self {
        let mut orchestrator = Orchestrator::new();
        orchestrator.set_intensity(config.intensity);
        Self {
            rng: FxRng::from_seed(seed),
            orchestrator,
            feedback: FeedbackDispatcher::new(vibrator, audio),
            particles: ParticleSystem::new(config.particle_capacity),
            presets: PresetTable::default(),
            camera: Camera::new(config.viewport_width, config.viewport_height),
            session: GameSession::with_combo_window(config.game_id, config.combo_window_ms),
            store,
            center: Vec2::new(config.viewport_width / 2.0, config.viewport_height / 2.0),
        }
    }

    /// Begins a run.
    pub fn start(&mut self) {
        self.session.start(self.store.as_ref());
    }

    /// Ends the run, settles it, and fires the game-over feedback
    /// immediately rather than on the next tick.
    pub fn end(&mut self) -> Option<SessionSummary> {
        let summary = self.session.end(self.store.as_mut());
        if summary.is_some() {
            self.route_session_events();
        }
        summary
    }

    /// Awards points (combo multiplier applies inside the session).
    pub fn add_score(&mut self, points: u32, position: Vec2) {
        self.session.add_score(points, position);
    }

    /// Bumps the combo and re-arms its decay window.
    pub fn increment_combo(&mut self, position: Vec2) {
        self.session.increment_combo(position);
    }

    /// Breaks the combo (player missed).
    pub fn reset_combo(&mut self) {
        self.session.reset_combo();
    }

    /// Advances every subsystem by `dt` seconds, in a fixed order.
    pub fn tick(&mut self, dt: f32) {
        self.session.update(dt);
        self.route_session_events();

        self.orchestrator.update(dt);
        self.route_fresh_effects(dt);

        self.camera.update(dt);
        self.particles.update(dt);
    }

    /// Celebrates a mid-run milestone (score threshold, level-up).
    pub fn milestone(&mut self, value: u32, position: Vec2) {
        self.feedback.milestone();
        let preset = milestone_preset(value, position, &mut self.rng);
        self.orchestrator.trigger_preset(preset);
    }

    /// Celebrates an achievement unlock at the given rarity.
    pub fn achievement(&mut self, rarity: AchievementRarity) {
        self.feedback.achievement();
        let preset = achievement_preset(rarity, &mut self.rng);
        self.orchestrator.trigger_preset(preset);
    }

    /// Fires a one-off effect, bypassing the session.
    pub fn trigger(&mut self, kind: EffectKind, overrides: EffectOverrides) {
        let _ = self.orchestrator.trigger(kind, overrides);
    }

    /// Spawns a named particle burst directly.
    pub fn burst(&mut self, preset_name: &str, position: Vec2) {
        if let Some(preset) = self.presets.get(preset_name) {
            let preset = preset.clone();
            self.particles.spawn_burst(position, &preset, &mut self.rng);
        } else {
            trace!(preset_name, "unknown particle preset");
        }
    }

    /// Kicks the camera directly.
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        self.camera.shake(intensity, duration);
    }

    /// Sets the effect fidelity knob.
    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.orchestrator.set_intensity(intensity);
    }

    /// Clears every timer-owning component. Call when the screen goes away.
    pub fn teardown(&mut self) {
        self.session.teardown();
        self.orchestrator.clear();
        self.particles.clear();
    }

    /// The session (score, combo, phase).
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The effect registry, for render passes.
    #[must_use]
    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// The particle simulation, for render passes.
    #[must_use]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access (follow targets, zoom).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Feedback policy access (mute, haptic enable/intensity).
    pub fn feedback_mut(&mut self) -> &mut FeedbackDispatcher {
        &mut self.feedback
    }

    /// Replaces the particle preset table.
    pub fn set_presets(&mut self, presets: PresetTable) {
        self.presets = presets;
    }

    /// Drains session events and maps each to effects and feedback.
    fn route_session_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::ScoreAdded { amount, position } => {
                    self.feedback.score();
                    let _ = self.orchestrator.trigger(
                        EffectKind::ScorePopup,
                        EffectOverrides {
                            position: Some(position),
                            payload: Some(EffectPayload::ScorePopup { amount }),
                            duration_ms: None,
                        },
                    );
                    self.burst("pickup", position);
                }
                SessionEvent::ComboChanged { level, position } => {
                    self.feedback.combo(level);
                    let preset = combo_preset(level, position, &mut self.rng);
                    self.orchestrator.trigger_preset(preset);
                }
                SessionEvent::ComboDropped { level } => {
                    trace!(level, "combo dropped");
                }
                SessionEvent::Ended { summary } => {
                    self.feedback.game_over();
                    if summary.is_high_score {
                        self.feedback.high_score();
                    }
                    let preset =
                        game_over_preset(summary.score, summary.is_high_score, &mut self.rng);
                    self.orchestrator.trigger_preset(preset);
                }
            }
        }
    }

    /// Routes effects launched this tick to the camera and particle layers.
    ///
    /// An effect is fresh when it has aged exactly one tick. Staggered
    /// preset entries become fresh on the tick they launch, so every
    /// launch is routed exactly once.
    fn route_fresh_effects(&mut self, dt: f32) {
        let dt_ms = dt * 1000.0;
        let mut shakes: Vec<(f32, f32)> = Vec::new();
        let mut bursts: Vec<(&'static str, Vec2, Option<u32>)> = Vec::new();

        for effect in self.orchestrator.active() {
            if effect.age_ms > dt_ms {
                continue;
            }
            let at = effect.position.unwrap_or(self.center);
            match &effect.payload {
                EffectPayload::ScreenShake { intensity } => {
                    shakes.push((*intensity, effect.duration_ms / 1000.0));
                }
                EffectPayload::ComboBurst { .. } => bursts.push(("explosion", at, None)),
                EffectPayload::Confetti { count, .. } => {
                    bursts.push(("confetti", at, Some(*count)));
                }
                EffectPayload::Sparks { count } => bursts.push(("sparks", at, Some(*count))),
                _ => {}
            }
        }

        for (intensity, duration) in shakes {
            self.camera.shake(intensity, duration);
        }
        for (name, position, count) in bursts {
            let Some(preset) = self.presets.get(name) else {
                continue;
            };
            let mut preset = preset.clone();
            if let Some(count) = count {
                preset.count = count;
            }
            self.particles.spawn_burst(position, &preset, &mut self.rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verve_feedback::{NullAudio, RecordingVibrator};
    use verve_session::MemoryScoreStore;

    fn context() -> JuiceContext {
        JuiceContext::new(
            JuiceConfig::default(),
            7,
            Box::new(MemoryScoreStore::new()),
            Box::new(RecordingVibrator::default()),
            Box::new(NullAudio),
        )
    }

    #[test]
    fn test_score_routes_to_popup_and_particles() {
        let mut ctx = context();
        ctx.start();
        ctx.add_score(100, Vec2::new(50.0, 50.0));
        ctx.tick(1.0 / 60.0);

        assert_eq!(ctx.session().score(), 100);
        assert!(ctx
            .orchestrator()
            .active()
            .iter()
            .any(|e| e.kind == EffectKind::ScorePopup));
        assert!(ctx.particles().active_count() > 0);
    }

    #[test]
    fn test_combo_four_shakes_camera() {
        let mut ctx = context();
        ctx.start();
        for _ in 0..4 {
            ctx.increment_combo(Vec2::ZERO);
        }
        // The shake is the preset's second entry, so it launches one
        // stagger slot after the combo burst.
        for _ in 0..8 {
            ctx.tick(1.0 / 60.0);
        }

        assert!(ctx.camera().shake.is_active());
    }

    #[test]
    fn test_end_fires_game_over_effects_immediately() {
        let mut ctx = context();
        ctx.start();
        ctx.add_score(300, Vec2::ZERO);
        ctx.tick(1.0 / 60.0);

        let summary = ctx.end().unwrap();
        assert!(summary.is_high_score);
        assert!(ctx
            .orchestrator()
            .active()
            .iter()
            .any(|e| e.kind == EffectKind::Flash));
        assert!(ctx.end().is_none());
    }

    #[test]
    fn test_teardown_clears_everything() {
        let mut ctx = context();
        ctx.start();
        ctx.increment_combo(Vec2::ZERO);
        ctx.add_score(10, Vec2::ZERO);
        ctx.tick(1.0 / 60.0);

        ctx.teardown();
        assert_eq!(ctx.orchestrator().active_count(), 0);
        assert_eq!(ctx.particles().active_count(), 0);
        assert!(!ctx.session().has_armed_timers());
    }
}

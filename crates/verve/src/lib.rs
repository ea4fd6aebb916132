//! # VERVE
//!
//! The game feel engine: particles, effects, camera, haptics, and session
//! state, wired into one context object.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       JuiceContext                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  ┌────────────┐  events   ┌──────────────┐                  │
//! │  │  Session   │──────────>│ Orchestrator │                  │
//! │  │ score/combo│           │   (effects)  │                  │
//! │  └────────────┘           └──────┬───────┘                  │
//! │        │                         │ fresh launches           │
//! │        │ feedback          ┌─────┴─────┬──────────┐         │
//! │        v                   v           v          │         │
//! │  ┌────────────┐      ┌──────────┐ ┌─────────┐     │         │
//! │  │ Dispatcher │      │  Camera  │ │Particles│<────┘         │
//! │  │audio+haptic│      │  (shake) │ │ (pool)  │               │
//! │  └────────────┘      └──────────┘ └─────────┘               │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hosts call [`JuiceContext::tick`] once per frame and render from the
//! orchestrator, particle system, and camera. Nothing here touches a wall
//! clock, a GPU, or a speaker: time comes in through `tick(dt)` and device
//! output leaves through the `Vibrator`/`AudioSink` traits.

pub mod context;

// Re-export the subsystem crates
pub use verve_camera as camera;
pub use verve_core as core;
pub use verve_effects as effects;
pub use verve_feedback as feedback;
pub use verve_particles as particles;
pub use verve_session as session;

// Re-export the types most hosts need
pub use context::{JuiceConfig, JuiceContext};
pub use verve_camera::Camera;
pub use verve_core::{Easing, FxRng, Scheduler, Spring, Timer, Tween, Vec2};
pub use verve_effects::{AchievementRarity, EffectKind, EffectOverrides, Intensity, Orchestrator};
pub use verve_feedback::{
    AudioSink, FeedbackDispatcher, HapticManager, NullAudio, NullVibrator, SoundCue, Vibrator,
};
pub use verve_particles::{ParticlePreset, ParticleSystem, PresetTable};
pub use verve_session::{
    GameSession, MemoryScoreStore, ScoreStore, SessionPhase, SessionSummary, TomlScoreStore,
};

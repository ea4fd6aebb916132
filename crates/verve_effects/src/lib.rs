//! # VERVE Effects
//!
//! The orchestrator for typed, time-boxed visual events ("juice").
//!
//! ## Design Principles
//!
//! 1. **Typed payloads** - every effect kind carries its own payload
//!    variant, so render dispatch is exhaustive and checked at compile time
//! 2. **Fire-and-forget** - triggering returns an id but callers never
//!    release effects; expiry after the duration is the only exit
//! 3. **Gate, don't degrade** - at low intensity, secondary kinds are
//!    dropped whole at trigger time rather than rendered cheaper
//!
//! Rendering is a projection owned by the consumer: iterate
//! [`Orchestrator::active`] and map each [`EffectKind`] to a drawer.

pub mod effect;
pub mod orchestrator;
pub mod presets;

pub use effect::{Effect, EffectId, EffectKind, EffectPayload};
pub use orchestrator::{EffectOverrides, Intensity, Orchestrator, STAGGER_MS};
pub use presets::{
    achievement_preset, combo_preset, game_over_preset, milestone_preset, AchievementRarity,
    EffectPreset, EffectSpec,
};

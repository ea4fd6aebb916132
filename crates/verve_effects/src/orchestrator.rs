//! The active-effects registry.
//!
//! State machine per effect: pending (staggered preset entries) -> active ->
//! expired. Expiry is driven by [`Orchestrator::update`]; there is no manual
//! cancel for a single effect, only [`Orchestrator::clear`] for teardown.

use tracing::trace;
use verve_core::math::Vec2;

use crate::effect::{Effect, EffectId, EffectKind, EffectPayload};
use crate::presets::EffectPreset;

/// Stagger between entries of a composite preset, in milliseconds.
///
/// Large enough that a celebration reads as a sequence, small enough that
/// it still feels like one event.
pub const STAGGER_MS: f32 = 80.0;

/// Visual fidelity knob.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intensity {
    /// Secondary effects are dropped at trigger time.
    Low,
    /// Everything plays.
    #[default]
    Medium,
    /// Everything plays; renderers may add extra flourish.
    High,
}

/// Per-trigger overrides; any `None` falls back to the kind's defaults.
#[derive(Clone, Debug, Default)]
pub struct EffectOverrides {
    /// Anchor position.
    pub position: Option<Vec2>,
    /// Replacement payload (must match the kind's variant by convention).
    pub payload: Option<EffectPayload>,
    /// Lifetime override in milliseconds.
    pub duration_ms: Option<f32>,
}

/// A preset entry waiting out its stagger delay.
#[derive(Clone, Debug)]
struct Pending {
    /// Milliseconds until launch.
    delay_ms: f32,
    /// The effect to launch.
    effect: Effect,
}

/// Registry of active effects with tick-driven auto-expiry.
#[derive(Debug, Default)]
pub struct Orchestrator {
    /// Currently live effects, insertion order.
    active: Vec<Effect>,
    /// Staggered preset entries not yet launched.
    pending: Vec<Pending>,
    /// Next effect id.
    next_id: u64,
    /// Fidelity knob.
    intensity: Intensity,
}

impl Orchestrator {
    /// Creates an empty orchestrator at medium intensity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fidelity knob; affects future triggers only.
    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.intensity = intensity;
    }

    /// Current fidelity knob.
    #[must_use]
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    /// Triggers a single effect.
    ///
    /// Returns `None` when the effect was gated off (secondary kind at low
    /// intensity) - a silent drop, by design never an error.
    pub fn trigger(&mut self, kind: EffectKind, overrides: EffectOverrides) -> Option<EffectId> {
        let effect = self.build(kind, overrides)?;
        let id = effect.id;
        self.active.push(effect);
        Some(id)
    }

    /// Fires a composite preset, staggering entry `i` by `i * STAGGER_MS`.
    ///
    /// Gated entries are skipped without consuming a stagger slot, so the
    /// rhythm of the surviving sequence is unchanged.
    pub fn trigger_preset(&mut self, preset: EffectPreset) {
        let mut slot = 0_u32;
        for spec in preset.entries {
            let overrides = EffectOverrides {
                position: spec.position,
                payload: Some(spec.payload),
                duration_ms: spec.duration_ms,
            };
            let Some(effect) = self.build(spec.kind, overrides) else {
                continue;
            };

            let delay_ms = slot as f32 * STAGGER_MS;
            slot += 1;
            if delay_ms <= 0.0 {
                self.active.push(effect);
            } else {
                self.pending.push(Pending { delay_ms, effect });
            }
        }
    }

    /// Constructs an effect, applying gating and defaults.
    fn build(&mut self, kind: EffectKind, overrides: EffectOverrides) -> Option<Effect> {
        if self.intensity == Intensity::Low && kind.is_secondary() {
            trace!(?kind, "effect gated at low intensity");
            return None;
        }

        let id = EffectId(self.next_id);
        self.next_id += 1;

        Some(Effect {
            id,
            kind,
            position: overrides.position,
            payload: overrides.payload.unwrap_or_else(|| kind.default_payload()),
            duration_ms: overrides.duration_ms.unwrap_or_else(|| kind.default_duration_ms()),
            age_ms: 0.0,
        })
    }

    /// Advances time by `dt` seconds: launches due preset entries, ages
    /// active effects, and drops the expired.
    pub fn update(&mut self, dt: f32) {
        let dt_ms = dt * 1000.0;

        let mut launch = Vec::new();
        for pending in &mut self.pending {
            pending.delay_ms -= dt_ms;
            if pending.delay_ms <= 0.0 {
                launch.push(pending.effect.clone());
            }
        }
        self.pending.retain(|p| p.delay_ms > 0.0);
        self.active.extend(launch);

        for effect in &mut self.active {
            effect.age_ms += dt_ms;
        }
        self.active.retain(|e| !e.expired());
    }

    /// Live effects in insertion order. Render passes project over this.
    #[must_use]
    pub fn active(&self) -> &[Effect] {
        &self.active
    }

    /// Live effect count (excludes pending stagger entries).
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Drops everything immediately - live and pending.
    ///
    /// Call on unmount/navigation so effects never outlive their context.
    pub fn clear(&mut self) {
        self.active.clear();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::EffectSpec;

    #[test]
    fn test_effect_auto_expires() {
        let mut orch = Orchestrator::new();
        orch.trigger(
            EffectKind::ScorePopup,
            EffectOverrides {
                duration_ms: Some(500.0),
                ..EffectOverrides::default()
            },
        );

        assert_eq!(orch.active_count(), 1);
        orch.update(0.4);
        assert_eq!(orch.active_count(), 1);
        orch.update(0.11); // crosses 500ms
        assert_eq!(orch.active_count(), 0);
    }

    #[test]
    fn test_low_intensity_gates_secondary() {
        let mut orch = Orchestrator::new();
        orch.set_intensity(Intensity::Low);

        assert!(orch.trigger(EffectKind::Sparks, EffectOverrides::default()).is_none());
        assert!(orch.trigger(EffectKind::Lightning, EffectOverrides::default()).is_none());
        assert!(orch.trigger(EffectKind::ScorePopup, EffectOverrides::default()).is_some());
        assert_eq!(orch.active_count(), 1);
    }

    #[test]
    fn test_preset_staggers_entries() {
        let mut orch = Orchestrator::new();
        let preset = EffectPreset {
            entries: vec![
                EffectSpec::new(EffectKind::Flash),
                EffectSpec::new(EffectKind::Confetti),
                EffectSpec::new(EffectKind::Fireworks),
            ],
        };

        orch.trigger_preset(preset);
        assert_eq!(orch.active_count(), 1); // only the first is live at once

        orch.update(STAGGER_MS / 1000.0 + 1e-3);
        assert_eq!(orch.active_count(), 2);

        orch.update(STAGGER_MS / 1000.0 + 1e-3);
        assert_eq!(orch.active_count(), 3);
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut orch = Orchestrator::new();
        let a = orch.trigger(EffectKind::Flash, EffectOverrides::default()).unwrap();
        let b = orch.trigger(EffectKind::Flash, EffectOverrides::default()).unwrap();
        assert_ne!(a, b);
        assert_eq!(orch.active()[0].id, a);
        assert_eq!(orch.active()[1].id, b);
    }

    #[test]
    fn test_clear_drops_pending_too() {
        let mut orch = Orchestrator::new();
        orch.trigger_preset(EffectPreset {
            entries: vec![
                EffectSpec::new(EffectKind::Flash),
                EffectSpec::new(EffectKind::Confetti),
            ],
        });

        orch.clear();
        orch.update(10.0); // pending entries must not resurrect
        assert_eq!(orch.active_count(), 0);
    }
}

//! Haptic patterns and the manager that plays them.
//!
//! A pattern is a vibrate duration or an alternating vibrate/pause train,
//! in milliseconds, always starting with a vibrate segment. The manager
//! owns the enable/intensity policy; device access goes through the
//! [`Vibrator`] trait so the whole stack is testable off-device.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// A vibration pattern in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticPattern {
    /// A single vibrate segment.
    Once(u32),
    /// Alternating vibrate/pause segments, vibrate first.
    Sequence(Vec<u32>),
}

impl HapticPattern {
    /// Flattens the pattern into segments, scaling vibrate durations
    /// (the even indices) by `intensity`.
    ///
    /// A scaled vibrate segment never drops below 1ms while its source
    /// is nonzero, so low intensity dims the pattern without erasing it.
    #[must_use]
    pub fn to_segments(&self, intensity: f32) -> Vec<u32> {
        let scale = |ms: u32| -> u32 {
            if ms == 0 {
                0
            } else {
                ((ms as f32 * intensity).round() as u32).max(1)
            }
        };
        match self {
            Self::Once(ms) => vec![scale(*ms)],
            Self::Sequence(segments) => segments
                .iter()
                .enumerate()
                .map(|(i, &ms)| if i % 2 == 0 { scale(ms) } else { ms })
                .collect(),
        }
    }
}

/// Pattern-table load failure.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The TOML text did not parse as a pattern table.
    #[error("failed to parse haptic pattern table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Named haptic patterns, with built-in defaults and TOML overrides.
#[derive(Clone, Debug)]
pub struct PatternTable {
    /// Pattern name to pattern.
    patterns: HashMap<String, HapticPattern>,
}

impl Default for PatternTable {
    fn default() -> Self {
        let mut patterns = HashMap::new();
        patterns.insert("tap".to_owned(), HapticPattern::Once(10));
        patterns.insert("success".to_owned(), HapticPattern::Sequence(vec![15, 30, 25]));
        patterns.insert(
            "high-score".to_owned(),
            HapticPattern::Sequence(vec![20, 40, 20, 40, 60]),
        );
        patterns.insert(
            "game-over".to_owned(),
            HapticPattern::Sequence(vec![60, 80, 40]),
        );
        patterns.insert("combo-1".to_owned(), HapticPattern::Once(15));
        patterns.insert("combo-2".to_owned(), HapticPattern::Sequence(vec![15, 30, 15]));
        patterns.insert(
            "combo-3".to_owned(),
            HapticPattern::Sequence(vec![20, 25, 20, 25, 20]),
        );
        patterns.insert(
            "combo-max".to_owned(),
            HapticPattern::Sequence(vec![25, 20, 25, 20, 25, 20, 40]),
        );
        Self { patterns }
    }
}

impl PatternTable {
    /// Layers patterns parsed from TOML over the built-in table.
    pub fn from_toml_str(text: &str) -> Result<Self, PatternError> {
        let overrides: HashMap<String, HapticPattern> = toml::from_str(text)?;
        let mut table = Self::default();
        table.patterns.extend(overrides);
        Ok(table)
    }

    /// Looks up a pattern by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HapticPattern> {
        self.patterns.get(name)
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no patterns are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Built-in pattern name for a combo level, `None` below the first tier.
#[must_use]
pub fn combo_tier(level: u32) -> Option<&'static str> {
    match level {
        0 | 1 => None,
        2 | 3 => Some("combo-1"),
        4..=6 => Some("combo-2"),
        7..=9 => Some("combo-3"),
        _ => Some("combo-max"),
    }
}

/// Synthesizes an escalating pulse train for combo levels past the fixed
/// table.
///
/// Pulse count is capped at 5; widths grow and gaps shrink with the level.
/// Levels of 8 and above append a pause and an amplified final pulse.
#[must_use]
pub fn escalating_pattern(level: u32) -> HapticPattern {
    let pulses = level.min(5);
    let mut segments = Vec::new();
    for i in 0..pulses {
        segments.push(12 + level + i * 4);
        if i + 1 < pulses {
            segments.push(40_u32.saturating_sub(i * 6).max(10));
        }
    }
    if level >= 8 {
        segments.push(120);
        segments.push(30 + level * 4);
    }
    HapticPattern::Sequence(segments)
}

/// Device vibration access.
pub trait Vibrator {
    /// Whether the device can vibrate at all. Probed once at manager
    /// construction.
    fn is_supported(&self) -> bool;

    /// Plays an alternating vibrate/pause train, vibrate first.
    fn vibrate(&mut self, segments: &[u32]);
}

/// A vibrator for platforms without haptics; reports unsupported.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullVibrator;

impl Vibrator for NullVibrator {
    fn is_supported(&self) -> bool {
        false
    }

    fn vibrate(&mut self, _segments: &[u32]) {}
}

/// Test double that records every vibrate call.
///
/// Clones share the same call log, so tests keep a handle after boxing
/// one clone into the manager.
#[derive(Clone, Debug, Default)]
pub struct RecordingVibrator {
    /// Shared log of vibrate calls.
    calls: Arc<Mutex<Vec<Vec<u32>>>>,
}

impl RecordingVibrator {
    /// Snapshot of every vibrate call so far.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<u32>> {
        self.calls.lock().clone()
    }
}

impl Vibrator for RecordingVibrator {
    fn is_supported(&self) -> bool {
        true
    }

    fn vibrate(&mut self, segments: &[u32]) {
        self.calls.lock().push(segments.to_vec());
    }
}

/// Plays named patterns subject to support, enablement, and intensity.
pub struct HapticManager {
    /// Device access.
    vibrator: Box<dyn Vibrator + Send>,
    /// Named patterns.
    patterns: PatternTable,
    /// Capability, probed once at construction.
    supported: bool,
    /// User toggle.
    enabled: bool,
    /// Vibrate-duration scale in `[0, 1]`.
    intensity: f32,
}

impl std::fmt::Debug for HapticManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HapticManager")
            .field("supported", &self.supported)
            .field("enabled", &self.enabled)
            .field("intensity", &self.intensity)
            .finish_non_exhaustive()
    }
}

impl HapticManager {
    /// Creates a manager over a device, probing support once.
    #[must_use]
    pub fn new(vibrator: Box<dyn Vibrator + Send>) -> Self {
        let supported = vibrator.is_supported();
        if !supported {
            debug!("haptics unsupported on this device, triggers will no-op");
        }
        Self {
            vibrator,
            patterns: PatternTable::default(),
            supported,
            enabled: true,
            intensity: 1.0,
        }
    }

    /// Replaces the pattern table.
    pub fn set_patterns(&mut self, patterns: PatternTable) {
        self.patterns = patterns;
    }

    /// Whether the device reported vibration support at construction.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Toggles haptics without touching support or intensity.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// True when triggers will reach the device.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.supported
    }

    /// Sets the vibrate-duration scale, clamped to `[0, 1]`.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.clamp(0.0, 1.0);
    }

    /// Current vibrate-duration scale.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Plays a named pattern. Unknown names, unsupported devices, and the
    /// disabled state all no-op; returns whether the device was hit.
    pub fn trigger(&mut self, name: &str) -> bool {
        if !self.is_enabled() {
            trace!(name, "haptic trigger skipped, disabled or unsupported");
            return false;
        }
        let Some(pattern) = self.patterns.get(name) else {
            debug!(name, "unknown haptic pattern");
            return false;
        };
        let segments = pattern.to_segments(self.intensity);
        self.vibrator.vibrate(&segments);
        true
    }

    /// Plays an ad-hoc pattern under the same policy as [`trigger`].
    ///
    /// [`trigger`]: Self::trigger
    pub fn trigger_pattern(&mut self, pattern: &HapticPattern) -> bool {
        if !self.is_enabled() {
            trace!("haptic pattern skipped, disabled or unsupported");
            return false;
        }
        let segments = pattern.to_segments(self.intensity);
        self.vibrator.vibrate(&segments);
        true
    }

    /// Plays the haptic for a combo level: the fixed tier pattern up to
    /// level 10, a synthesized escalation beyond it.
    pub fn combo(&mut self, level: u32) -> bool {
        match combo_tier(level) {
            None => false,
            Some("combo-max") if level > 10 => {
                self.trigger_pattern(&escalating_pattern(level))
            }
            Some(name) => self.trigger(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_manager() -> (HapticManager, RecordingVibrator) {
        let recorder = RecordingVibrator::default();
        (HapticManager::new(Box::new(recorder.clone())), recorder)
    }

    #[test]
    fn test_trigger_plays_named_pattern() {
        let (mut manager, recorder) = recording_manager();
        assert!(manager.trigger("tap"));
        assert_eq!(recorder.calls(), vec![vec![10]]);
    }

    #[test]
    fn test_unsupported_device_no_ops() {
        let mut manager = HapticManager::new(Box::new(NullVibrator));
        assert!(!manager.is_supported());
        assert!(!manager.trigger("tap"));
    }

    #[test]
    fn test_disabled_no_ops() {
        let (mut manager, recorder) = recording_manager();
        manager.set_enabled(false);
        assert!(!manager.trigger("tap"));
        assert!(recorder.calls().is_empty());

        manager.set_enabled(true);
        assert!(manager.trigger("tap"));
    }

    #[test]
    fn test_intensity_scales_vibrate_segments_only() {
        let (mut manager, recorder) = recording_manager();
        manager.set_intensity(0.5);
        assert!(manager.trigger("combo-2")); // [15, 30, 15]

        // vibrate segments halve, the 30ms gap is untouched
        assert_eq!(recorder.calls(), vec![vec![8, 30, 8]]);
    }

    #[test]
    fn test_intensity_clamped() {
        let (mut manager, _) = recording_manager();
        manager.set_intensity(3.0);
        assert_eq!(manager.intensity(), 1.0);
        manager.set_intensity(-1.0);
        assert_eq!(manager.intensity(), 0.0);
    }

    #[test]
    fn test_combo_tier_thresholds() {
        assert_eq!(combo_tier(1), None);
        assert_eq!(combo_tier(2), Some("combo-1"));
        assert_eq!(combo_tier(4), Some("combo-2"));
        assert_eq!(combo_tier(7), Some("combo-3"));
        assert_eq!(combo_tier(10), Some("combo-max"));
        assert_eq!(combo_tier(99), Some("combo-max"));
    }

    #[test]
    fn test_escalation_caps_pulses_and_amplifies_finale() {
        let HapticPattern::Sequence(low) = escalating_pattern(6) else {
            panic!("sequence expected");
        };
        // 5 pulses with 4 gaps, no finale below level 8
        assert_eq!(low.len(), 9);

        let HapticPattern::Sequence(high) = escalating_pattern(12) else {
            panic!("sequence expected");
        };
        // finale adds a pause and an amplified pulse
        assert_eq!(high.len(), 11);
        assert_eq!(high[9], 120);
        assert_eq!(high[10], 30 + 12 * 4);
    }

    #[test]
    fn test_pattern_table_toml_overrides() {
        let table = PatternTable::from_toml_str(
            r#"
            tap = { once = 25 }
            thunder = { sequence = [80, 40, 80] }
            "#,
        )
        .unwrap();

        assert_eq!(table.get("tap"), Some(&HapticPattern::Once(25)));
        assert_eq!(
            table.get("thunder"),
            Some(&HapticPattern::Sequence(vec![80, 40, 80]))
        );
        // built-ins survive the overlay
        assert!(table.get("combo-max").is_some());
    }
}

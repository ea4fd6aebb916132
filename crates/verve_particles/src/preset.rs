//! Named particle preset templates.
//!
//! Presets are immutable spawn templates shared by reference across spawns.
//! The built-in set covers the stock game-feel vocabulary; games can
//! override or extend it from a TOML table loaded once at startup.

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use verve_core::math::Color;

/// Errors raised while loading preset tables.
#[derive(Error, Debug)]
pub enum PresetError {
    /// The TOML text did not parse.
    #[error("invalid preset table: {0}")]
    Parse(#[from] toml::de::Error),

    /// A preset carried an empty color set.
    #[error("preset '{0}' has no colors")]
    NoColors(String),
}

/// Immutable spawn template: ranges are sampled per particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticlePreset {
    /// Particles per burst.
    pub count: u32,
    /// Minimum initial speed (units per tick).
    pub speed_min: f32,
    /// Maximum initial speed.
    pub speed_max: f32,
    /// Minimum render size.
    pub size_min: f32,
    /// Maximum render size.
    pub size_max: f32,
    /// Minimum starting life.
    pub life_min: f32,
    /// Maximum starting life.
    pub life_max: f32,
    /// Color set; one entry is picked uniformly per particle.
    pub colors: Vec<Color>,
    /// Downward acceleration.
    pub gravity: f32,
    /// Per-tick velocity multiplier.
    pub friction: f32,
    /// Emission cone width in radians.
    pub spread: f32,
    /// Emission cone center in radians (0 = +x, PI/2 = down the +y axis).
    pub direction: f32,
}

impl Default for ParticlePreset {
    fn default() -> Self {
        Self {
            count: 12,
            speed_min: 1.0,
            speed_max: 4.0,
            size_min: 2.0,
            size_max: 5.0,
            life_min: 0.6,
            life_max: 1.2,
            colors: vec![Color::WHITE],
            gravity: 0.0,
            friction: 0.98,
            spread: TAU,
            direction: 0.0,
        }
    }
}

impl ParticlePreset {
    /// Radial burst for impacts and destruction.
    #[must_use]
    pub fn explosion() -> Self {
        Self {
            count: 24,
            speed_min: 2.0,
            speed_max: 7.0,
            size_min: 3.0,
            size_max: 7.0,
            life_min: 0.5,
            life_max: 1.0,
            colors: vec![
                Color::new(1.0, 0.85, 0.3, 1.0), // gold
                Color::new(1.0, 0.5, 0.1, 1.0),  // orange
                Color::new(1.0, 0.25, 0.1, 1.0), // ember red
            ],
            gravity: 0.15,
            friction: 0.96,
            spread: TAU,
            direction: 0.0,
        }
    }

    /// Celebratory upward scatter that tumbles down.
    #[must_use]
    pub fn confetti() -> Self {
        Self {
            count: 32,
            speed_min: 3.0,
            speed_max: 8.0,
            size_min: 3.0,
            size_max: 6.0,
            life_min: 1.0,
            life_max: 2.0,
            colors: vec![
                Color::new(1.0, 0.35, 0.55, 1.0), // pink
                Color::new(0.35, 0.8, 1.0, 1.0),  // sky
                Color::new(1.0, 0.9, 0.35, 1.0),  // yellow
                Color::new(0.55, 1.0, 0.55, 1.0), // mint
                Color::new(0.75, 0.55, 1.0, 1.0), // violet
            ],
            gravity: 0.25,
            friction: 0.97,
            spread: PI * 0.8,
            direction: -PI / 2.0, // up
        }
    }

    /// Short fast glints for scoring ticks.
    #[must_use]
    pub fn sparks() -> Self {
        Self {
            count: 10,
            speed_min: 4.0,
            speed_max: 9.0,
            size_min: 1.5,
            size_max: 3.0,
            life_min: 0.2,
            life_max: 0.45,
            colors: vec![
                Color::new(1.0, 1.0, 0.7, 1.0),
                Color::new(1.0, 0.95, 0.4, 1.0),
            ],
            gravity: 0.05,
            friction: 0.92,
            spread: TAU,
            direction: 0.0,
        }
    }

    /// Single soft puff, intended once per frame behind a moving object.
    #[must_use]
    pub fn trail() -> Self {
        Self {
            count: 1,
            speed_min: 0.2,
            speed_max: 0.8,
            size_min: 2.0,
            size_max: 4.0,
            life_min: 0.3,
            life_max: 0.6,
            colors: vec![Color::new(0.8, 0.9, 1.0, 1.0)],
            gravity: 0.0,
            friction: 0.9,
            spread: TAU,
            direction: 0.0,
        }
    }

    /// Gentle rising motes for collectible pickups.
    #[must_use]
    pub fn pickup() -> Self {
        Self {
            count: 8,
            speed_min: 1.0,
            speed_max: 2.5,
            size_min: 2.0,
            size_max: 4.0,
            life_min: 0.5,
            life_max: 0.9,
            colors: vec![
                Color::new(0.5, 1.0, 0.6, 1.0),
                Color::new(0.8, 1.0, 0.8, 1.0),
            ],
            gravity: -0.08, // floats up
            friction: 0.95,
            spread: PI / 2.0,
            direction: -PI / 2.0,
        }
    }

    /// Slow ambient drift for idle screens.
    #[must_use]
    pub fn ambient() -> Self {
        Self {
            count: 2,
            speed_min: 0.1,
            speed_max: 0.5,
            size_min: 1.0,
            size_max: 2.5,
            life_min: 2.0,
            life_max: 4.0,
            colors: vec![Color::new(1.0, 1.0, 1.0, 0.6)],
            gravity: 0.0,
            friction: 1.0,
            spread: TAU,
            direction: 0.0,
        }
    }
}

/// Named preset registry with the built-ins pre-registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetTable {
    /// Presets by name.
    presets: HashMap<String, ParticlePreset>,
}

impl Default for PresetTable {
    fn default() -> Self {
        let mut presets = HashMap::new();
        presets.insert("explosion".to_owned(), ParticlePreset::explosion());
        presets.insert("confetti".to_owned(), ParticlePreset::confetti());
        presets.insert("sparks".to_owned(), ParticlePreset::sparks());
        presets.insert("trail".to_owned(), ParticlePreset::trail());
        presets.insert("pickup".to_owned(), ParticlePreset::pickup());
        presets.insert("ambient".to_owned(), ParticlePreset::ambient());
        Self { presets }
    }
}

impl PresetTable {
    /// Loads a table from TOML text, layered over the built-ins.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError`] when the TOML does not parse or a preset
    /// declares an empty color set.
    pub fn from_toml_str(text: &str) -> Result<Self, PresetError> {
        let overrides: HashMap<String, ParticlePreset> = toml::from_str(text)?;

        let mut table = Self::default();
        for (name, preset) in overrides {
            if preset.colors.is_empty() {
                return Err(PresetError::NoColors(name));
            }
            table.presets.insert(name, preset);
        }
        Ok(table)
    }

    /// Looks up a preset by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParticlePreset> {
        self.presets.get(name)
    }

    /// Registered preset count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// True when no presets are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let table = PresetTable::default();
        for name in ["explosion", "confetti", "sparks", "trail", "pickup", "ambient"] {
            assert!(table.get(name).is_some(), "missing builtin: {name}");
        }
    }

    #[test]
    fn test_toml_override_layers_on_builtins() {
        let text = r#"
            [explosion]
            count = 99
            speed_min = 1.0
            speed_max = 2.0
            size_min = 1.0
            size_max = 2.0
            life_min = 0.5
            life_max = 1.0
            colors = [{ r = 1.0, g = 0.0, b = 0.0, a = 1.0 }]
            gravity = 0.0
            friction = 1.0
            spread = 6.28
            direction = 0.0
        "#;

        let table = PresetTable::from_toml_str(text).unwrap();
        assert_eq!(table.get("explosion").unwrap().count, 99);
        assert!(table.get("confetti").is_some()); // untouched builtin survives
    }

    #[test]
    fn test_empty_color_set_rejected() {
        let text = r#"
            [bad]
            count = 1
            speed_min = 0.0
            speed_max = 1.0
            size_min = 1.0
            size_max = 1.0
            life_min = 1.0
            life_max = 1.0
            colors = []
            gravity = 0.0
            friction = 1.0
            spread = 1.0
            direction = 0.0
        "#;

        assert!(matches!(
            PresetTable::from_toml_str(text),
            Err(PresetError::NoColors(name)) if name == "bad"
        ));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            PresetTable::from_toml_str("not = [valid"),
            Err(PresetError::Parse(_))
        ));
    }
}

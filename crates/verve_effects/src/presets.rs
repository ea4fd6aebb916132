//! Composite celebration presets.
//!
//! Each builder is a pure function from session data to an [`EffectPreset`]:
//! the kind sequence and durations are deterministic for a given input,
//! while particle counts and colors come from the injected rng. Tests
//! assert on sequence and duration, never on the random details.

use verve_core::math::{Color, Vec2};
use verve_core::rng::FxRng;

use crate::effect::{EffectKind, EffectPayload};

/// One entry of a composite preset.
#[derive(Clone, Debug)]
pub struct EffectSpec {
    /// What to fire.
    pub kind: EffectKind,
    /// Kind-specific parameters.
    pub payload: EffectPayload,
    /// Lifetime override; `None` uses the kind default.
    pub duration_ms: Option<f32>,
    /// Anchor position, when the effect is placed.
    pub position: Option<Vec2>,
}

impl EffectSpec {
    /// Spec with default payload/duration and no anchor.
    #[must_use]
    pub fn new(kind: EffectKind) -> Self {
        Self {
            kind,
            payload: kind.default_payload(),
            duration_ms: None,
            position: None,
        }
    }

    /// Replaces the payload.
    #[must_use]
    pub fn with_payload(mut self, payload: EffectPayload) -> Self {
        self.payload = payload;
        self
    }

    /// Overrides the lifetime.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Anchors the effect.
    #[must_use]
    pub fn at(mut self, position: Vec2) -> Self {
        self.position = Some(position);
        self
    }
}

/// An ordered list of effects fired with a stagger.
#[derive(Clone, Debug, Default)]
pub struct EffectPreset {
    /// Entries in launch order.
    pub entries: Vec<EffectSpec>,
}

/// Achievement rarity, scaling the celebration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AchievementRarity {
    /// Baseline unlock.
    Common,
    /// Noteworthy unlock.
    Rare,
    /// Big unlock.
    Epic,
    /// The full sky-filling treatment.
    Legendary,
}

impl AchievementRarity {
    /// Confetti piece budget for this rarity.
    #[must_use]
    const fn confetti_count(self) -> u32 {
        match self {
            Self::Common => 30,
            Self::Rare => 60,
            Self::Epic => 120,
            Self::Legendary => 250,
        }
    }
}

/// Festive palette shared by the celebration builders.
const PARTY_COLORS: [Color; 5] = [
    Color::new(1.0, 0.35, 0.55, 1.0),
    Color::new(0.35, 0.8, 1.0, 1.0),
    Color::new(1.0, 0.9, 0.35, 1.0),
    Color::new(0.55, 1.0, 0.55, 1.0),
    Color::new(0.75, 0.55, 1.0, 1.0),
];

/// Picks `count` colors (with repeats) from the party palette.
fn pick_colors(rng: &mut FxRng, count: usize) -> Vec<Color> {
    (0..count)
        .map(|_| rng.pick(&PARTY_COLORS).copied().unwrap_or(Color::WHITE))
        .collect()
}

/// Celebration for reaching a combo level.
///
/// Level 1 is a bare burst; shake joins at 4, sparks at 7, lightning at 10.
#[must_use]
pub fn combo_preset(level: u32, position: Vec2, rng: &mut FxRng) -> EffectPreset {
    let mut entries = vec![EffectSpec::new(EffectKind::ComboBurst)
        .with_payload(EffectPayload::ComboBurst { level })
        .at(position)];

    if level >= 4 {
        entries.push(
            EffectSpec::new(EffectKind::ScreenShake).with_payload(EffectPayload::ScreenShake {
                intensity: 2.0 + level as f32 * 0.5,
            }),
        );
    }
    if level >= 7 {
        entries.push(
            EffectSpec::new(EffectKind::Sparks)
                .with_payload(EffectPayload::Sparks {
                    count: rng.range_u32(8, 16) + level * 2,
                })
                .at(position),
        );
    }
    if level >= 10 {
        entries.push(EffectSpec::new(EffectKind::Lightning).with_payload(
            EffectPayload::Lightning {
                bolts: rng.range_u32(2, 4),
            },
        ));
    }

    EffectPreset { entries }
}

/// Celebration for unlocking an achievement.
#[must_use]
pub fn achievement_preset(rarity: AchievementRarity, rng: &mut FxRng) -> EffectPreset {
    let mut entries = vec![
        EffectSpec::new(EffectKind::Flash).with_payload(EffectPayload::Flash {
            color: Color::new(1.0, 1.0, 1.0, 0.8),
        }),
        EffectSpec::new(EffectKind::Confetti).with_payload(EffectPayload::Confetti {
            count: rarity.confetti_count(),
            colors: pick_colors(rng, 4),
        }),
    ];

    if rarity >= AchievementRarity::Epic {
        entries.push(
            EffectSpec::new(EffectKind::Fireworks).with_payload(EffectPayload::Fireworks {
                bursts: if rarity == AchievementRarity::Legendary { 6 } else { 3 },
                colors: pick_colors(rng, 3),
            }),
        );
    }

    EffectPreset { entries }
}

/// End-of-run sequence; a new high score upgrades it to a full celebration.
#[must_use]
pub fn game_over_preset(score: u32, is_high_score: bool, rng: &mut FxRng) -> EffectPreset {
    let mut entries = vec![
        EffectSpec::new(EffectKind::Flash)
            .with_payload(EffectPayload::Flash {
                color: Color::new(0.1, 0.1, 0.2, 0.6),
            })
            .with_duration_ms(400.0),
        EffectSpec::new(EffectKind::ScorePopup)
            .with_payload(EffectPayload::ScorePopup { amount: score })
            .with_duration_ms(1500.0),
    ];

    if is_high_score {
        entries.push(
            EffectSpec::new(EffectKind::Confetti).with_payload(EffectPayload::Confetti {
                count: 150,
                colors: pick_colors(rng, 5),
            }),
        );
        entries.push(
            EffectSpec::new(EffectKind::Fireworks).with_payload(EffectPayload::Fireworks {
                bursts: rng.range_u32(4, 6),
                colors: pick_colors(rng, 3),
            }),
        );
    }

    EffectPreset { entries }
}

/// Mid-run milestone (score thresholds, level-ups).
#[must_use]
pub fn milestone_preset(value: u32, position: Vec2, rng: &mut FxRng) -> EffectPreset {
    EffectPreset {
        entries: vec![
            EffectSpec::new(EffectKind::ScorePopup)
                .with_payload(EffectPayload::ScorePopup { amount: value })
                .at(position),
            EffectSpec::new(EffectKind::Ripple)
                .with_payload(EffectPayload::Ripple {
                    max_radius: rng.range_f32(50.0, 90.0),
                })
                .at(position),
            EffectSpec::new(EffectKind::Sparks)
                .with_payload(EffectPayload::Sparks {
                    count: rng.range_u32(6, 14),
                })
                .at(position),
        ],
    }
}

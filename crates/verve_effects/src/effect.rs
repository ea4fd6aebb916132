//! Effect kinds, payloads, and the active-effect record.

use verve_core::math::{Color, Vec2};

/// Identifier handed back by a trigger; unique within one orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EffectId(
    /// Raw sequence number.
    pub u64,
);

/// The visual vocabulary of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Floating score number at a position.
    ScorePopup,
    /// Radial pop celebrating a combo step.
    ComboBurst,
    /// Falling confetti sheet.
    Confetti,
    /// Camera shake request (consumed by the camera layer).
    ScreenShake,
    /// Full-screen color flash.
    Flash,
    /// Small glints (secondary).
    Sparks,
    /// Branching bolts (secondary).
    Lightning,
    /// Radial motion streaks (secondary).
    SpeedLines,
    /// Expanding touch ripple.
    Ripple,
    /// Multi-burst fireworks.
    Fireworks,
}

impl EffectKind {
    /// Default lifetime in milliseconds, overridable per trigger.
    #[must_use]
    pub const fn default_duration_ms(self) -> f32 {
        match self {
            Self::ScorePopup => 800.0,
            Self::ComboBurst => 600.0,
            Self::Confetti => 2000.0,
            Self::ScreenShake => 400.0,
            Self::Flash => 250.0,
            Self::Sparks => 500.0,
            Self::Lightning => 350.0,
            Self::SpeedLines => 700.0,
            Self::Ripple => 450.0,
            Self::Fireworks => 2500.0,
        }
    }

    /// Secondary kinds are dropped entirely at low intensity.
    #[must_use]
    pub const fn is_secondary(self) -> bool {
        matches!(self, Self::Sparks | Self::Lightning | Self::SpeedLines)
    }

    /// Payload variant used when a trigger supplies none.
    #[must_use]
    pub fn default_payload(self) -> EffectPayload {
        match self {
            Self::ScorePopup => EffectPayload::ScorePopup { amount: 0 },
            Self::ComboBurst => EffectPayload::ComboBurst { level: 1 },
            Self::Confetti => EffectPayload::Confetti {
                count: 40,
                colors: vec![Color::WHITE],
            },
            Self::ScreenShake => EffectPayload::ScreenShake { intensity: 4.0 },
            Self::Flash => EffectPayload::Flash { color: Color::WHITE },
            Self::Sparks => EffectPayload::Sparks { count: 10 },
            Self::Lightning => EffectPayload::Lightning { bolts: 2 },
            Self::SpeedLines => EffectPayload::SpeedLines { density: 0.5 },
            Self::Ripple => EffectPayload::Ripple { max_radius: 60.0 },
            Self::Fireworks => EffectPayload::Fireworks {
                bursts: 3,
                colors: vec![Color::WHITE],
            },
        }
    }

    /// Every kind, for exhaustive tests.
    pub const ALL: [Self; 10] = [
        Self::ScorePopup,
        Self::ComboBurst,
        Self::Confetti,
        Self::ScreenShake,
        Self::Flash,
        Self::Sparks,
        Self::Lightning,
        Self::SpeedLines,
        Self::Ripple,
        Self::Fireworks,
    ];
}

/// Strongly-typed payload per effect kind.
///
/// Renderers match on this exhaustively; adding a kind without a payload
/// shape is a compile error, which is the point.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectPayload {
    /// Score amount to display.
    ScorePopup {
        /// Points shown in the popup.
        amount: u32,
    },
    /// Combo celebration parameters.
    ComboBurst {
        /// Combo level reached.
        level: u32,
    },
    /// Confetti sheet parameters.
    Confetti {
        /// Pieces to spawn.
        count: u32,
        /// Piece color set.
        colors: Vec<Color>,
    },
    /// Camera shake request.
    ScreenShake {
        /// Peak offset in world units.
        intensity: f32,
    },
    /// Full-screen flash.
    Flash {
        /// Flash color.
        color: Color,
    },
    /// Glint parameters.
    Sparks {
        /// Glints to spawn.
        count: u32,
    },
    /// Lightning parameters.
    Lightning {
        /// Bolt count.
        bolts: u32,
    },
    /// Speed-line parameters.
    SpeedLines {
        /// Streak density in `[0, 1]`.
        density: f32,
    },
    /// Ripple parameters.
    Ripple {
        /// Final ring radius.
        max_radius: f32,
    },
    /// Fireworks parameters.
    Fireworks {
        /// Number of bursts over the effect's life.
        bursts: u32,
        /// Burst color set.
        colors: Vec<Color>,
    },
}

/// An active, time-boxed visual event.
#[derive(Clone, Debug)]
pub struct Effect {
    /// Orchestrator-assigned id.
    pub id: EffectId,
    /// What to render.
    pub kind: EffectKind,
    /// Screen position, when the effect is anchored.
    pub position: Option<Vec2>,
    /// Kind-specific parameters.
    pub payload: EffectPayload,
    /// Total lifetime in milliseconds.
    pub duration_ms: f32,
    /// Milliseconds since trigger.
    pub age_ms: f32,
}

impl Effect {
    /// Remaining life as a fraction, in `[0, 1]`.
    #[must_use]
    pub fn life_ratio(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            0.0
        } else {
            (1.0 - self.age_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// True once the effect has outlived its duration.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.age_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_flags() {
        let secondary: Vec<_> = EffectKind::ALL
            .into_iter()
            .filter(|k| k.is_secondary())
            .collect();
        assert_eq!(
            secondary,
            vec![EffectKind::Sparks, EffectKind::Lightning, EffectKind::SpeedLines]
        );
    }

    #[test]
    fn test_default_payload_matches_kind() {
        // Each kind's default payload must be its own variant
        for kind in EffectKind::ALL {
            let payload = kind.default_payload();
            let matches = matches!(
                (kind, &payload),
                (EffectKind::ScorePopup, EffectPayload::ScorePopup { .. })
                    | (EffectKind::ComboBurst, EffectPayload::ComboBurst { .. })
                    | (EffectKind::Confetti, EffectPayload::Confetti { .. })
                    | (EffectKind::ScreenShake, EffectPayload::ScreenShake { .. })
                    | (EffectKind::Flash, EffectPayload::Flash { .. })
                    | (EffectKind::Sparks, EffectPayload::Sparks { .. })
                    | (EffectKind::Lightning, EffectPayload::Lightning { .. })
                    | (EffectKind::SpeedLines, EffectPayload::SpeedLines { .. })
                    | (EffectKind::Ripple, EffectPayload::Ripple { .. })
                    | (EffectKind::Fireworks, EffectPayload::Fireworks { .. })
            );
            assert!(matches, "mismatched default payload for {kind:?}");
        }
    }

    #[test]
    fn test_life_ratio_clamps() {
        let mut effect = Effect {
            id: EffectId(1),
            kind: EffectKind::Flash,
            position: None,
            payload: EffectKind::Flash.default_payload(),
            duration_ms: 100.0,
            age_ms: 0.0,
        };

        assert_eq!(effect.life_ratio(), 1.0);
        effect.age_ms = 250.0;
        assert_eq!(effect.life_ratio(), 0.0);
        assert!(effect.expired());
    }
}

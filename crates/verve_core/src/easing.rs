//! Easing curves for tweened values.
//!
//! Every curve maps `0 -> 0` and `1 -> 1`; what happens in between is the
//! personality of the animation. Feedback-heavy UI wants the snappy ones
//! (`ExpoOut`, `BackOut`); reserve `Linear` for progress bars.

use serde::{Deserialize, Serialize};

/// Easing function selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Straight interpolation (progress bars, little else).
    Linear,
    /// Quadratic ease-in (accelerating).
    QuadIn,
    /// Quadratic ease-out (decelerating).
    QuadOut,
    /// Quadratic ease-in-out.
    QuadInOut,
    /// Cubic ease-in.
    CubicIn,
    /// Cubic ease-out (the workhorse for UI motion).
    #[default]
    CubicOut,
    /// Cubic ease-in-out.
    CubicInOut,
    /// Exponential ease-out (SHARP snap to target).
    ExpoOut,
    /// Overshoots past the target, then settles back.
    BackOut,
    /// Spring-like wobble into the target.
    ElasticOut,
    /// Bounces off the target like a dropped ball.
    BounceOut,
}

impl Easing {
    /// Back-out overshoot constant (the classic Penner value).
    const BACK_OVERSHOOT: f32 = 1.70158;

    /// Applies the easing curve to a progress value.
    ///
    /// `t` is clamped to `[0, 1]` before evaluation.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => t * (2.0 - t),
            Self::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
            Self::ExpoOut => {
                // Sharp snap: 1 - 2^(-10t)
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::BackOut => {
                let c = Self::BACK_OVERSHOOT;
                let u = t - 1.0;
                u * u * ((c + 1.0) * u + c) + 1.0
            }
            Self::ElasticOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let p = 0.3;
                    2.0_f32.powf(-10.0 * t)
                        * ((t - p / 4.0) * std::f32::consts::TAU / p).sin()
                        + 1.0
                }
            }
            Self::BounceOut => bounce_out(t),
        }
    }

    /// All curves, for exhaustive range tests.
    pub const ALL: [Self; 11] = [
        Self::Linear,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::ExpoOut,
        Self::BackOut,
        Self::ElasticOut,
        Self::BounceOut,
    ];
}

/// Piecewise-parabola bounce (Penner bounce-out).
fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let u = t - 1.5 / D;
        N * u * u + 0.75
    } else if t < 2.5 / D {
        let u = t - 2.25 / D;
        N * u * u + 0.9375
    } else {
        let u = t - 2.625 / D;
        N * u * u + 0.984_375
    }
}

//! Expanding ring primitive (touch ripples, shockwaves).
//!
//! A ring is a single entity, not a particle cloud: radius grows toward a
//! maximum with an ease-out curve while alpha fades with elapsed life.

use verve_core::easing::Easing;
use verve_core::math::{Color, Vec2};
use verve_core::surface::DrawSurface;

/// One expanding, fading ring.
#[derive(Debug, Clone)]
pub struct RingEffect {
    /// Center position.
    pub position: Vec2,
    /// Current radius.
    pub radius: f32,
    /// Radius reached at the end of life.
    pub max_radius: f32,
    /// Stroke color; alpha is driven by remaining life.
    pub color: Color,
    /// Stroke width.
    pub line_width: f32,
    /// Total lifetime in seconds.
    lifetime: f32,
    /// Elapsed seconds.
    elapsed: f32,
}

impl RingEffect {
    /// Creates a ring that expands to `max_radius` over `lifetime` seconds.
    #[must_use]
    pub fn new(position: Vec2, max_radius: f32, lifetime: f32, color: Color) -> Self {
        Self {
            position,
            radius: 0.0,
            max_radius,
            color,
            line_width: 3.0,
            lifetime: lifetime.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Advances the ring; returns true while it is still visible.
    pub fn update(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        let t = (self.elapsed / self.lifetime).min(1.0);
        self.radius = self.max_radius * Easing::CubicOut.apply(t);
        self.color.a = 1.0 - t;
        !self.finished()
    }

    /// True once the lifetime has fully elapsed.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.lifetime
    }

    /// Paints the ring outline. Read-only.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) {
        if self.finished() {
            return;
        }
        surface.stroke_circle(
            self.position.x,
            self.position.y,
            self.radius,
            self.line_width,
            self.color,
        );
    }
}

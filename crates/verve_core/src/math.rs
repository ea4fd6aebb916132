//! Mathematical value types and scalar helpers shared across the engine.
//!
//! These are the canonical representations used by every subsystem; the
//! scalar helpers below are the vocabulary the tween, camera, and particle
//! code is written in.

use serde::{Deserialize, Serialize};

/// 2D vector - positions, velocities, offsets.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle - camera bounds, visible regions.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Creates a new rect from origin and size
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the point lies inside (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// RGBA color with float components in `[0, 1]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl Color {
    /// Creates a new color
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Returns this color with alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Linear interpolation between `a` and `b` by `t`.
///
/// `t` is not clamped; callers wanting clamped behavior clamp first.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: where does `value` sit between `a` and `b`?
///
/// Returns 0 when the range is degenerate (`a == b`).
#[inline]
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < f32::EPSILON {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Remaps `value` from the range `[in_min, in_max]` to `[out_min, out_max]`.
#[inline]
#[must_use]
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Hermite smoothstep between two edges, clamped to `[0, 1]`.
#[inline]
#[must_use]
pub fn smoothstep(edge0: f32, edge1: f32, value: f32) -> f32 {
    let t = inverse_lerp(edge0, edge1, value).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Normalized pulse wave: rises 0 -> 1 -> 0 over one period of `time`.
#[inline]
#[must_use]
pub fn pulse(time: f32, period: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    let phase = (time / period).fract();
    (phase * std::f32::consts::PI).sin().abs()
}

/// Sine oscillation between `min` and `max` with the given frequency (Hz).
#[inline]
#[must_use]
pub fn oscillate(time: f32, min: f32, max: f32, frequency: f32) -> f32 {
    let s = (time * frequency * std::f32::consts::TAU).sin();
    remap(s, -1.0, 1.0, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);

        let sum = a + b;
        assert_eq!(sum.x, 5.0);
        assert_eq!(sum.y, 8.0);

        assert_eq!(a.dot(b), 16.0); // 1*4 + 2*6
        assert_eq!(a.distance(b), 5.0); // 3-4-5 triangle
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert!(r.contains(Vec2::new(5.0, 2.5)));
        assert!(r.contains(Vec2::new(10.0, 5.0))); // edges inclusive
        assert!(!r.contains(Vec2::new(10.1, 2.0)));
    }

    #[test]
    fn test_lerp_and_inverse() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0); // degenerate range
    }

    #[test]
    fn test_remap() {
        assert_eq!(remap(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
    }

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_oscillate_stays_in_range() {
        for i in 0..100 {
            let v = oscillate(i as f32 * 0.031, 2.0, 6.0, 1.7);
            assert!((2.0..=6.0).contains(&v), "out of range: {v}");
        }
    }
}

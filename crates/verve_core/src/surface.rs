//! Outbound drawing interface.
//!
//! The engine never draws directly; renderers hand it something implementing
//! [`DrawSurface`] and the particle/camera crates project their state onto
//! it. A recording implementation lives in each consumer's tests.

use crate::math::Color;

/// Minimal 2D surface contract the engine renders against.
///
/// Implementations are expected to maintain a transform stack in the usual
/// save/restore discipline. All coordinates are in the surface's current
/// transformed space.
pub trait DrawSurface {
    /// Pushes the current transform onto the stack.
    fn save(&mut self);

    /// Pops the transform stack.
    fn restore(&mut self);

    /// Translates the coordinate system.
    fn translate(&mut self, x: f32, y: f32);

    /// Scales the coordinate system uniformly.
    fn scale(&mut self, factor: f32);

    /// Rotates the coordinate system by `radians`.
    fn rotate(&mut self, radians: f32);

    /// Fills an axis-aligned rectangle centered on the current origin.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);

    /// Fills a circle.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);

    /// Strokes a circle outline.
    fn stroke_circle(&mut self, x: f32, y: f32, radius: f32, line_width: f32, color: Color);
}

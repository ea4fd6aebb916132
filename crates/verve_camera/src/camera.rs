//! Camera state, smoothing, shake, and coordinate transforms.

use verve_core::math::{lerp, Rect, Vec2};
use verve_core::surface::DrawSurface;

/// Transient shake state layered on top of the camera position.
#[derive(Debug, Clone, Default)]
pub struct Shake {
    /// Peak offset magnitude in world units.
    pub intensity: f32,
    /// Total shake duration in seconds.
    pub duration: f32,
    /// Elapsed seconds.
    pub elapsed: f32,
    /// Current offset, zeroed once the shake expires.
    pub offset: Vec2,
}

impl Shake {
    // Two incommensurate frequencies per axis keep the motion from reading
    // as a simple wobble.
    const FREQ_A: f32 = 31.0;
    const FREQ_B: f32 = 47.0;
    const FREQ_C: f32 = 37.0;
    const FREQ_D: f32 = 41.0;

    /// True while the shake is still producing offsets.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.duration > 0.0 && self.elapsed < self.duration
    }

    fn update(&mut self, dt: f32) {
        if !self.is_active() {
            self.offset = Vec2::ZERO;
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.offset = Vec2::ZERO;
            self.intensity = 0.0;
            return;
        }

        // Linear decay over the shake's life
        let decay = 1.0 - self.elapsed / self.duration;
        let t = self.elapsed;
        let amp = self.intensity * decay;
        self.offset = Vec2::new(
            ((t * Self::FREQ_A).sin() + 0.5 * (t * Self::FREQ_B).cos()) * amp,
            ((t * Self::FREQ_C).cos() + 0.5 * (t * Self::FREQ_D).sin()) * amp,
        );
    }
}

/// A smooth-follow 2D camera.
///
/// `position` is the world point at the center of the view. Targets move
/// instantly; the camera eases toward them at `follow_speed`/`zoom_speed`
/// every update.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Current center position (world space).
    pub position: Vec2,
    /// Position the camera eases toward.
    pub target: Vec2,
    /// Current zoom factor (1.0 = 1 world unit per pixel).
    pub zoom: f32,
    /// Zoom the camera eases toward.
    pub target_zoom: f32,
    /// Lower zoom clamp.
    pub min_zoom: f32,
    /// Upper zoom clamp.
    pub max_zoom: f32,
    /// Viewport size in screen pixels.
    pub viewport: Vec2,
    /// Follow smoothing rate (fraction per tick at 60 fps).
    pub follow_speed: f32,
    /// Zoom smoothing rate.
    pub zoom_speed: f32,
    /// Optional world rectangle the view must stay inside.
    pub bounds: Option<Rect>,
    /// Active shake state.
    pub shake: Shake,
}

impl Camera {
    /// Creates a camera centered on the origin.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            target: Vec2::ZERO,
            zoom: 1.0,
            target_zoom: 1.0,
            min_zoom: 0.25,
            max_zoom: 4.0,
            viewport: Vec2::new(viewport_width, viewport_height),
            follow_speed: 0.1,
            zoom_speed: 0.1,
            bounds: None,
            shake: Shake::default(),
        }
    }

    /// Sets the follow target (smoothed).
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// Jumps the camera to a position, bypassing smoothing.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
        self.target = self.position;
    }

    /// Sets the zoom target, clamped to `[min_zoom, max_zoom]` (smoothed).
    pub fn set_zoom(&mut self, zoom: f32) {
        self.target_zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Jumps the zoom immediately, clamped.
    pub fn set_zoom_immediate(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self.target_zoom = self.zoom;
    }

    /// Arms a shake of the given intensity (world units) and duration.
    pub fn shake(&mut self, intensity: f32, duration: f32) {
        self.shake = Shake {
            intensity,
            duration,
            elapsed: 0.0,
            offset: Vec2::ZERO,
        };
    }

    /// Advances smoothing, bounds clamping, and shake by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let follow_t = (self.follow_speed * dt * 60.0).min(1.0);
        let zoom_t = (self.zoom_speed * dt * 60.0).min(1.0);

        self.position.x = lerp(self.position.x, self.target.x, follow_t);
        self.position.y = lerp(self.position.y, self.target.y, follow_t);
        self.zoom = lerp(self.zoom, self.target_zoom, zoom_t);

        if let Some(bounds) = self.bounds {
            self.clamp_to(bounds);
        }

        self.shake.update(dt);
    }

    /// Clamps the center so the zoom-scaled viewport stays inside `bounds`;
    /// axes where the view is wider than the bounds center instead.
    fn clamp_to(&mut self, bounds: Rect) {
        let half_w = self.viewport.x / (2.0 * self.zoom);
        let half_h = self.viewport.y / (2.0 * self.zoom);

        self.position.x = if half_w * 2.0 >= bounds.width {
            bounds.x + bounds.width / 2.0
        } else {
            self.position.x.clamp(bounds.x + half_w, bounds.right() - half_w)
        };
        self.position.y = if half_h * 2.0 >= bounds.height {
            bounds.y + bounds.height / 2.0
        } else {
            self.position.y.clamp(bounds.y + half_h, bounds.bottom() - half_h)
        };
    }

    /// Effective view center including the shake offset.
    #[must_use]
    fn view_center(&self) -> Vec2 {
        self.position + self.shake.offset
    }

    /// Maps a world point to screen pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.view_center()) * self.zoom + self.viewport * 0.5
    }

    /// Maps a screen pixel to world space (inverse of [`Camera::world_to_screen`]).
    #[must_use]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.viewport * 0.5) * (1.0 / self.zoom) + self.view_center()
    }

    /// True if the world point is inside the view, padded by `margin` world units.
    #[must_use]
    pub fn is_in_view(&self, world: Vec2, margin: f32) -> bool {
        let bounds = self.visible_bounds();
        let padded = Rect::new(
            bounds.x - margin,
            bounds.y - margin,
            bounds.width + margin * 2.0,
            bounds.height + margin * 2.0,
        );
        padded.contains(world)
    }

    /// World rectangle currently visible.
    #[must_use]
    pub fn visible_bounds(&self) -> Rect {
        let half_w = self.viewport.x / (2.0 * self.zoom);
        let half_h = self.viewport.y / (2.0 * self.zoom);
        let center = self.view_center();
        Rect::new(center.x - half_w, center.y - half_h, half_w * 2.0, half_h * 2.0)
    }

    /// Pushes this camera's view transform onto a drawing surface.
    ///
    /// Pair with [`Camera::reset_transform`] after world-space drawing.
    pub fn apply_transform<S: DrawSurface>(&self, surface: &mut S) {
        let center = self.view_center();
        surface.save();
        surface.translate(self.viewport.x / 2.0, self.viewport.y / 2.0);
        surface.scale(self.zoom);
        surface.translate(-center.x, -center.y);
    }

    /// Pops the transform pushed by [`Camera::apply_transform`].
    pub fn reset_transform<S: DrawSurface>(&self, surface: &mut S) {
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(800.0, 600.0)
    }

    #[test]
    fn test_follow_converges_on_target() {
        let mut cam = camera();
        cam.set_target(100.0, -40.0);

        for _ in 0..300 {
            cam.update(1.0 / 60.0);
        }

        assert!((cam.position.x - 100.0).abs() < 0.1);
        assert!((cam.position.y + 40.0).abs() < 0.1);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut cam = camera();
        cam.set_zoom(100.0);
        assert_eq!(cam.target_zoom, cam.max_zoom);

        cam.set_zoom_immediate(0.0001);
        assert_eq!(cam.zoom, cam.min_zoom);
    }

    #[test]
    fn test_bounds_clamp_keeps_view_inside() {
        let mut cam = camera();
        cam.bounds = Some(Rect::new(0.0, 0.0, 2000.0, 2000.0));
        cam.set_position(0.0, 0.0); // half the view hangs outside

        cam.update(1.0 / 60.0);

        let visible = cam.visible_bounds();
        assert!(visible.x >= -1e-3);
        assert!(visible.y >= -1e-3);
    }

    #[test]
    fn test_small_bounds_center_the_view() {
        let mut cam = camera();
        cam.bounds = Some(Rect::new(0.0, 0.0, 100.0, 100.0)); // smaller than view
        cam.set_position(999.0, 999.0);

        cam.update(1.0 / 60.0);

        assert!((cam.position.x - 50.0).abs() < 1e-3);
        assert!((cam.position.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_transform_round_trip() {
        let mut cam = camera();
        cam.set_position(123.0, 45.0);
        cam.set_zoom_immediate(2.0);

        let world = Vec2::new(-30.0, 77.0);
        let back = cam.screen_to_world(cam.world_to_screen(world));
        assert!((back.x - world.x).abs() < 1e-3);
        assert!((back.y - world.y).abs() < 1e-3);
    }

    #[test]
    fn test_shake_offsets_then_expires() {
        let mut cam = camera();
        cam.shake(10.0, 0.3);

        cam.update(0.1);
        let moved = cam.shake.offset.length() > 0.0;

        for _ in 0..30 {
            cam.update(0.1);
        }

        assert!(moved, "shake produced no offset");
        assert_eq!(cam.shake.offset, Vec2::ZERO);
        assert!(!cam.shake.is_active());
    }

    #[test]
    fn test_is_in_view_respects_margin() {
        let mut cam = camera();
        cam.set_position(0.0, 0.0);

        // Just outside the right edge (half-width = 400)
        let point = Vec2::new(405.0, 0.0);
        assert!(!cam.is_in_view(point, 0.0));
        assert!(cam.is_in_view(point, 10.0));
    }
}

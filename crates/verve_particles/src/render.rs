//! Read-only particle painters.
//!
//! These project the simulation onto a [`DrawSurface`]; they never mutate
//! system state. Alpha comes pre-multiplied into each particle's color by
//! the update loop.

use verve_core::surface::DrawSurface;

use crate::system::ParticleSystem;

/// Paints each live particle as a rotated square.
///
/// With `shrink`, the square scales down with the particle's remaining life
/// so it visually burns out instead of popping.
pub fn draw_particles<S: DrawSurface>(surface: &mut S, system: &ParticleSystem, shrink: bool) {
    for particle in system.iter() {
        let size = if shrink {
            particle.size * particle.life_ratio()
        } else {
            particle.size
        };
        if size <= 0.0 {
            continue;
        }

        surface.save();
        surface.translate(particle.position.x, particle.position.y);
        surface.rotate(particle.rotation);
        surface.fill_rect(-size / 2.0, -size / 2.0, size, size, particle.color);
        surface.restore();
    }
}

/// Paints each live particle as a circle (no rotation needed).
pub fn draw_particles_circle<S: DrawSurface>(surface: &mut S, system: &ParticleSystem, shrink: bool) {
    for particle in system.iter() {
        let size = if shrink {
            particle.size * particle.life_ratio()
        } else {
            particle.size
        };
        if size <= 0.0 {
            continue;
        }

        surface.fill_circle(
            particle.position.x,
            particle.position.y,
            size / 2.0,
            particle.color,
        );
    }
}

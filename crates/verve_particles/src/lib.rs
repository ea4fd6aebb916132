//! # VERVE Particles
//!
//! CPU particle simulation for game-feel effects.
//!
//! ## Design Principles
//!
//! 1. **Pooled, never allocated per frame** - every particle lives in a slot
//!    acquired from a fixed-capacity pool
//! 2. **Two saturation policies, on purpose** - the raw pool drops new spawns
//!    when full (backpressure); the [`ParticleSystem`] layer instead evicts
//!    its oldest particle so the newest feedback always shows
//! 3. **Preset-driven** - spawn parameters come from named, immutable
//!    templates; gameplay code never hand-rolls initial conditions
//!
//! ## Example
//!
//! ```rust,ignore
//! use verve_core::{FxRng, Vec2};
//! use verve_particles::{ParticlePreset, ParticleSystem};
//!
//! let mut system = ParticleSystem::new(256);
//! let mut rng = FxRng::from_seed(1);
//! system.spawn_burst(Vec2::new(100.0, 50.0), &ParticlePreset::explosion(), &mut rng);
//! system.update(1.0 / 60.0);
//! ```

pub mod particle;
pub mod preset;
pub mod render;
pub mod ring;
pub mod system;

pub use particle::{Particle, ParticlePool, ParticleSeed};
pub use preset::{ParticlePreset, PresetError, PresetTable};
pub use render::{draw_particles, draw_particles_circle};
pub use ring::RingEffect;
pub use system::{ParticleSystem, SystemStats};

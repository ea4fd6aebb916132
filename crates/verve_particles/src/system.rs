//! Preset-driven particle system with oldest-first eviction.
//!
//! The system layers spawn policy on top of [`ParticlePool`]: when its soft
//! cap is reached, the earliest-spawned particle is evicted to make room.
//! New feedback is what the player is reacting to right now; a half-faded
//! old particle is the cheapest thing on screen to lose.

use std::collections::VecDeque;

use verve_core::math::Vec2;
use verve_core::pool::SlotHandle;
use verve_core::rng::FxRng;

use crate::particle::{Particle, ParticlePool, ParticleSeed};
use crate::preset::ParticlePreset;

/// Counters exposed for HUD/debug overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemStats {
    /// Live particles.
    pub active: usize,
    /// Particles evicted at the soft cap since the last clear.
    pub evicted: u64,
    /// Particles expired by the update loop since the last clear.
    pub expired: u64,
}

/// A pooled particle simulation fed by named presets.
pub struct ParticleSystem {
    /// Backing storage.
    pool: ParticlePool,
    /// Spawn order, oldest at the front.
    order: VecDeque<SlotHandle>,
    /// Maximum live particles before eviction kicks in.
    soft_cap: usize,
    /// Evictions since the last clear.
    evicted: u64,
    /// Expiries since the last clear.
    expired: u64,
}

impl ParticleSystem {
    /// Creates a system whose soft cap equals the pool capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: ParticlePool::new(capacity),
            order: VecDeque::with_capacity(capacity),
            soft_cap: capacity,
            evicted: 0,
            expired: 0,
        }
    }

    /// Spawns a full burst from a preset at `position`.
    ///
    /// Each particle gets an angle within `direction ± spread/2` and
    /// speed/size/life sampled uniformly from the preset ranges; its color
    /// is picked from the preset's color set.
    pub fn spawn_burst(&mut self, position: Vec2, preset: &ParticlePreset, rng: &mut FxRng) {
        for _ in 0..preset.count {
            self.spawn_one(position, preset, rng);
        }
    }

    /// Spawns a single particle - call once per frame for continuous trails.
    pub fn spawn_trail(&mut self, position: Vec2, preset: &ParticlePreset, rng: &mut FxRng) {
        self.spawn_one(position, preset, rng);
    }

    fn spawn_one(&mut self, position: Vec2, preset: &ParticlePreset, rng: &mut FxRng) {
        // Evict the oldest live particle when the cap is reached. Handles in
        // the order queue can be stale (expired by update); skip those.
        while self.order.len() >= self.soft_cap {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            if self.pool.release(oldest) {
                self.evicted += 1;
                break;
            }
        }

        let half_spread = preset.spread / 2.0;
        let angle = rng.range_f32(preset.direction - half_spread, preset.direction + half_spread);
        let speed = rng.range_f32(preset.speed_min, preset.speed_max);
        let color = rng
            .pick(&preset.colors)
            .copied()
            .unwrap_or_default();

        let seed = ParticleSeed {
            position,
            velocity: Vec2::new(angle.cos() * speed, angle.sin() * speed),
            size: rng.range_f32(preset.size_min, preset.size_max),
            color,
            rotation: rng.range_f32(0.0, std::f32::consts::TAU),
            rotation_speed: rng.range_f32(-0.2, 0.2),
            life: rng.range_f32(preset.life_min, preset.life_max),
            gravity: preset.gravity,
            friction: preset.friction,
        };

        if let Some(handle) = self.pool.spawn(&seed) {
            self.order.push_back(handle);
        }
    }

    /// Integrates all live particles; returns how many expired this tick.
    pub fn update(&mut self, dt: f32) -> usize {
        let expired = self.pool.update(dt);
        self.expired += expired as u64;

        if expired > 0 {
            // Drop stale handles so the order queue tracks only live slots.
            let pool = &self.pool;
            self.order.retain(|handle| pool.is_active(*handle));
        }
        expired
    }

    /// Iterates over live particles in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.pool.iter().map(|(_, particle)| particle)
    }

    /// Live particle count.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    /// Deactivates everything and resets counters.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.order.clear();
        self.evicted = 0;
        self.expired = 0;
    }

    /// Counter snapshot.
    #[must_use]
    pub fn stats(&self) -> SystemStats {
        SystemStats {
            active: self.pool.active_count(),
            evicted: self.evicted,
            expired: self.expired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> FxRng {
        FxRng::from_seed(42)
    }

    #[test]
    fn test_burst_spawns_preset_count() {
        let mut system = ParticleSystem::new(64);
        let mut rng = rng();

        system.spawn_burst(Vec2::ZERO, &ParticlePreset::explosion(), &mut rng);
        assert_eq!(system.active_count(), ParticlePreset::explosion().count as usize);
    }

    #[test]
    fn test_soft_cap_evicts_oldest() {
        let mut system = ParticleSystem::new(3);
        let mut rng = rng();
        let preset = ParticlePreset {
            count: 1,
            life_min: 5.0,
            life_max: 5.0,
            ..ParticlePreset::default()
        };

        for i in 0..4 {
            system.spawn_burst(Vec2::new(i as f32, 0.0), &preset, &mut rng);
        }

        // Capacity 3, 4 spawns: the first (x = 0) was evicted
        assert_eq!(system.active_count(), 3);
        assert_eq!(system.stats().evicted, 1);
        assert!(system.iter().all(|p| p.position.x > 0.0));
    }

    #[test]
    fn test_spawned_values_within_preset_ranges() {
        let mut system = ParticleSystem::new(256);
        let mut rng = rng();
        let preset = ParticlePreset::confetti();

        system.spawn_burst(Vec2::ZERO, &preset, &mut rng);

        for p in system.iter() {
            assert!(p.size >= preset.size_min && p.size < preset.size_max);
            assert!(p.life >= preset.life_min && p.life < preset.life_max);
            let speed = p.velocity.length();
            assert!(
                speed >= preset.speed_min - 1e-3 && speed <= preset.speed_max + 1e-3,
                "speed out of range: {speed}"
            );
        }
    }

    #[test]
    fn test_update_reports_expired() {
        let mut system = ParticleSystem::new(16);
        let mut rng = rng();
        let preset = ParticlePreset {
            count: 4,
            life_min: 0.05,
            life_max: 0.05,
            ..ParticlePreset::default()
        };

        system.spawn_burst(Vec2::ZERO, &preset, &mut rng);
        let expired = system.update(0.5);
        assert_eq!(expired, 4);
        assert_eq!(system.active_count(), 0);
        assert_eq!(system.stats().expired, 4);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut system = ParticleSystem::new(8);
        let mut rng = rng();
        system.spawn_burst(Vec2::ZERO, &ParticlePreset::sparks(), &mut rng);

        system.clear();
        assert_eq!(system.active_count(), 0);
        assert_eq!(system.stats(), SystemStats::default());
    }
}

//! Particle records and the pooled storage that owns them.

use tracing::trace;
use verve_core::math::{Color, Vec2};
use verve_core::pool::{Pool, PoolStats, SlotHandle};

/// Per-tick life decrement at the 60 fps baseline.
///
/// A particle with `max_life = 1.0` lives one second at 60 fps.
const LIFE_DECAY_PER_TICK: f32 = 1.0 / 60.0;

/// A single transient particle.
///
/// Owned exclusively by the pool slot it occupies; gameplay code only ever
/// sees borrows during iteration. Inert (`life <= 0`) until spawned.
#[derive(Debug, Clone)]
pub struct Particle {
    /// World position.
    pub position: Vec2,
    /// Velocity in units per tick at the 60 fps baseline.
    pub velocity: Vec2,
    /// Render size.
    pub size: f32,
    /// Render color; alpha is recomputed from the life ratio every tick.
    pub color: Color,
    /// Rotation in radians.
    pub rotation: f32,
    /// Rotation speed in radians per tick.
    pub rotation_speed: f32,
    /// Remaining life fraction.
    pub life: f32,
    /// Life fraction at spawn, for alpha/shrink ratios.
    pub max_life: f32,
    /// Downward acceleration applied to `velocity.y`.
    pub gravity: f32,
    /// Per-tick velocity multiplier, applied to both components.
    pub friction: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 1.0,
            color: Color::WHITE,
            rotation: 0.0,
            rotation_speed: 0.0,
            life: 0.0, // inert until spawned
            max_life: 1.0,
            gravity: 0.0,
            friction: 1.0,
        }
    }
}

impl Particle {
    /// Remaining life as a fraction of the spawn life, in `[0, 1]`.
    #[must_use]
    pub fn life_ratio(&self) -> f32 {
        if self.max_life <= 0.0 {
            0.0
        } else {
            (self.life / self.max_life).clamp(0.0, 1.0)
        }
    }
}

/// Initial conditions for a spawn. Omitted fields take the defaults.
#[derive(Debug, Clone)]
pub struct ParticleSeed {
    /// Spawn position.
    pub position: Vec2,
    /// Initial velocity.
    pub velocity: Vec2,
    /// Render size.
    pub size: f32,
    /// Render color.
    pub color: Color,
    /// Initial rotation in radians.
    pub rotation: f32,
    /// Rotation speed in radians per tick.
    pub rotation_speed: f32,
    /// Starting life fraction.
    pub life: f32,
    /// Downward acceleration.
    pub gravity: f32,
    /// Per-tick velocity multiplier.
    pub friction: f32,
}

impl Default for ParticleSeed {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 3.0,
            color: Color::WHITE,
            rotation: 0.0,
            rotation_speed: 0.0,
            life: 1.0,
            gravity: 0.0,
            friction: 1.0,
        }
    }
}

/// Fixed-capacity particle storage.
///
/// Spawns beyond capacity are dropped silently and counted; that is the
/// pool's backpressure contract protecting the frame budget.
pub struct ParticlePool {
    /// Slot storage.
    pool: Pool<Particle>,
    /// Spawns dropped due to saturation since the last clear.
    dropped: u64,
}

impl ParticlePool {
    /// Creates a pool with `capacity` pre-allocated particles.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: Pool::new(capacity),
            dropped: 0,
        }
    }

    /// Spawns a particle with the given initial conditions.
    ///
    /// Returns `None` when the pool is saturated; the request is dropped,
    /// never queued.
    pub fn spawn(&mut self, seed: &ParticleSeed) -> Option<SlotHandle> {
        let Some(handle) = self.pool.acquire() else {
            self.dropped += 1;
            trace!(dropped = self.dropped, "particle spawn dropped: pool saturated");
            return None;
        };

        let particle = self
            .pool
            .get_mut(handle)
            .unwrap_or_else(|| unreachable!("freshly acquired slot is active"));

        particle.position = seed.position;
        particle.velocity = seed.velocity;
        particle.size = seed.size;
        particle.color = seed.color;
        particle.rotation = seed.rotation;
        particle.rotation_speed = seed.rotation_speed;
        particle.life = seed.life;
        particle.max_life = seed.life.max(f32::EPSILON);
        particle.gravity = seed.gravity;
        particle.friction = seed.friction;

        Some(handle)
    }

    /// Releases a specific particle. Idempotent.
    pub fn release(&mut self, handle: SlotHandle) -> bool {
        self.pool.release(handle)
    }

    /// Integrates physics for every active particle.
    ///
    /// `dt` is in seconds; motion is normalized against the 60 fps baseline
    /// so particle fields read as per-tick quantities. Particles whose life
    /// reaches zero are released. Returns the number that expired.
    pub fn update(&mut self, dt: f32) -> usize {
        let ticks = dt * 60.0;
        let mut dead: Vec<SlotHandle> = Vec::new();

        for (handle, particle) in self.pool.iter_mut() {
            particle.velocity.y += particle.gravity * ticks;
            particle.velocity.x *= particle.friction.powf(ticks);
            particle.velocity.y *= particle.friction.powf(ticks);
            particle.position = particle.position + particle.velocity * ticks;
            particle.rotation += particle.rotation_speed * ticks;
            particle.life -= LIFE_DECAY_PER_TICK * ticks;
            particle.color.a = particle.life_ratio();

            if particle.life <= 0.0 {
                dead.push(handle);
            }
        }

        for handle in &dead {
            self.pool.release(*handle);
        }
        dead.len()
    }

    /// Iterates over live particles.
    pub fn iter(&self) -> impl Iterator<Item = (SlotHandle, &Particle)> {
        self.pool.iter()
    }

    /// Number of live particles.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    /// True while the handle refers to a live particle.
    #[must_use]
    pub fn is_active(&self, handle: SlotHandle) -> bool {
        self.pool.is_active(handle)
    }

    /// Deactivates every particle.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.dropped = 0;
    }

    /// Occupancy snapshot; `active + available == capacity` always holds.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Spawns dropped due to saturation since the last clear.
    #[must_use]
    pub fn dropped_count(&self) -> u64 {
        self.dropped
    }
}

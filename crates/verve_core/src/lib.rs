//! # VERVE Core
//!
//! Leaf primitives for the VERVE game-feel engine.
//!
//! ## Design Principles
//!
//! 1. **Tick-driven, never ambient** - every long-running behavior is modeled
//!    as repeated `update(dt)` calls; nothing schedules itself on a hidden
//!    event loop
//! 2. **Pre-allocate, then reuse** - the pool never grows; saturation is
//!    backpressure, not an error
//! 3. **Deterministic random** - all randomness flows through a seedable
//!    [`FxRng`] so tests can pin exact sequences
//! 4. **Cancellation is ownership** - every armed task returns a handle the
//!    owner must cancel on teardown
//!
//! ## Example
//!
//! ```rust,ignore
//! use verve_core::{Tween, Easing};
//!
//! let mut tween = Tween::new(0.0, 100.0, 0.5).with_easing(Easing::CubicOut);
//! let value = tween.update(0.016);
//! ```

pub mod easing;
pub mod math;
pub mod pool;
pub mod rng;
pub mod scheduler;
pub mod surface;
pub mod tween;

pub use easing::Easing;
pub use math::{lerp, inverse_lerp, oscillate, pulse, remap, smoothstep, Color, Rect, Vec2};
pub use pool::{Pool, PoolStats, SlotHandle};
pub use rng::FxRng;
pub use scheduler::{Scheduler, TaskHandle};
pub use surface::DrawSurface;
pub use tween::{Spring, Timer, Tween};

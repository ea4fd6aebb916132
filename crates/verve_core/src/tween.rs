//! Time-driven value animation: tweens, springs, and timers.
//!
//! Nothing here owns a clock. Callers feed `dt` (seconds) every frame and
//! read the resulting value; completion is reported through flags the caller
//! polls, not callbacks. Updating a finished tween or timer is a safe no-op.

use crate::easing::Easing;
use crate::math::lerp;

/// A finite interpolation from a start value to an end value.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Value at progress 0.
    start: f32,
    /// Value at progress 1.
    end: f32,
    /// Total duration in seconds.
    duration: f32,
    /// Accumulated time in seconds.
    elapsed: f32,
    /// Easing curve applied to the raw progress.
    easing: Easing,
    /// Current eased value.
    current: f32,
    /// Set once `elapsed` reaches `duration`.
    complete: bool,
    /// True only for the tick on which completion happened.
    just_completed: bool,
}

impl Tween {
    /// Creates an inert tween; nothing moves until [`Tween::update`] is called.
    #[must_use]
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
            easing: Easing::default(),
            current: start,
            complete: false,
            just_completed: false,
        }
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advances the tween and returns the current value.
    ///
    /// On the tick that crosses the full duration the value snaps exactly to
    /// the end value. Further calls keep returning the end value unchanged.
    pub fn update(&mut self, dt: f32) -> f32 {
        self.just_completed = false;

        if self.complete {
            return self.end;
        }

        self.elapsed += dt;

        let progress = if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            self.current = self.end;
            self.complete = true;
            self.just_completed = true;
        } else {
            self.current = lerp(self.start, self.end, self.easing.apply(progress));
        }

        self.current
    }

    /// Current value without advancing time.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// True once the tween has reached its end value.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// True only on the tick where completion occurred.
    ///
    /// This is the poll-style replacement for an `on_complete` callback:
    /// check it right after [`Tween::update`].
    #[inline]
    #[must_use]
    pub fn just_completed(&self) -> bool {
        self.just_completed
    }

    /// Rewinds to the start so the tween can replay.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.current = self.start;
        self.complete = false;
        self.just_completed = false;
    }
}

/// A physically simulated value that chases a movable target.
///
/// Unlike [`Tween`] a spring has no terminal state; the caller decides when
/// it is close enough via [`Spring::settled`].
#[derive(Debug, Clone)]
pub struct Spring {
    /// Current value.
    value: f32,
    /// Target the value is pulled toward.
    target: f32,
    /// Current velocity.
    velocity: f32,
    /// Pull strength toward the target.
    stiffness: f32,
    /// Velocity dissipation.
    damping: f32,
}

impl Spring {
    /// Creates a spring at rest on `value`.
    #[must_use]
    pub fn new(value: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            value,
            target: value,
            velocity: 0.0,
            stiffness,
            damping,
        }
    }

    /// Sets a new target; the spring starts chasing it on the next update.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps straight to a value, killing all velocity.
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Integrates one step of the spring force and returns the value.
    ///
    /// `dt` is in seconds.
    pub fn update(&mut self, dt: f32) -> f32 {
        let force = (self.target - self.value) * self.stiffness - self.velocity * self.damping;
        self.velocity += force * dt;
        self.value += self.velocity * dt;
        self.value
    }

    /// Current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current target.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// True when both displacement and velocity are within `epsilon`.
    #[must_use]
    pub fn settled(&self, epsilon: f32) -> bool {
        (self.target - self.value).abs() < epsilon && self.velocity.abs() < epsilon
    }
}

/// A one-shot or looping countdown.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Trigger interval in seconds.
    duration: f32,
    /// Accumulated time in seconds.
    elapsed: f32,
    /// Wrap and fire again when true.
    looping: bool,
    /// Set once a one-shot timer has fired.
    complete: bool,
}

impl Timer {
    /// Creates a timer that fires after `duration` seconds.
    #[must_use]
    pub fn new(duration: f32, looping: bool) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            looping,
            complete: false,
        }
    }

    /// Advances the timer; returns true if it fired this call.
    ///
    /// Loop mode wraps the elapsed time modulo the duration, so a single
    /// update spanning several periods still fires only once. One-shot
    /// timers become complete and ignore further updates.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.complete {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed < self.duration {
            return false;
        }

        if self.looping {
            self.elapsed %= self.duration.max(f32::EPSILON);
        } else {
            self.complete = true;
        }
        true
    }

    /// True once a one-shot timer has fired.
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Fraction of the current period elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        }
    }

    /// Rewinds the timer to fire again.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.complete = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_exact_duration_reaches_end() {
        let mut tween = Tween::new(0.0, 100.0, 0.5).with_easing(Easing::Linear);

        for _ in 0..5 {
            tween.update(0.1);
        }

        assert_eq!(tween.value(), 100.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_tween_post_completion_is_noop() {
        let mut tween = Tween::new(0.0, 10.0, 0.1);
        tween.update(0.2);
        assert!(tween.just_completed());

        let v = tween.update(1.0);
        assert_eq!(v, 10.0);
        assert!(!tween.just_completed()); // fires exactly once
    }

    #[test]
    fn test_tween_zero_duration_completes_immediately() {
        let mut tween = Tween::new(5.0, 9.0, 0.0);
        assert_eq!(tween.update(0.016), 9.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_tween_reset_replays() {
        let mut tween = Tween::new(0.0, 1.0, 0.1);
        tween.update(0.2);
        tween.reset();
        assert!(!tween.is_complete());
        assert_eq!(tween.value(), 0.0);
        assert_eq!(tween.update(0.2), 1.0);
    }

    #[test]
    fn test_spring_converges_to_target() {
        let mut spring = Spring::new(0.0, 120.0, 14.0);
        spring.set_target(50.0);

        for _ in 0..600 {
            spring.update(1.0 / 60.0);
        }

        assert!(spring.settled(0.5), "spring did not settle: {}", spring.value());
        assert!((spring.value() - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_timer_one_shot() {
        let mut timer = Timer::new(0.5, false);
        assert!(!timer.update(0.3));
        assert!(timer.update(0.3));
        assert!(timer.is_complete());
        assert!(!timer.update(1.0)); // dead timers stay dead
    }

    #[test]
    fn test_timer_loop_wraps() {
        let mut timer = Timer::new(0.2, true);
        assert!(timer.update(0.25));
        assert!(!timer.is_complete());
        // 0.05 carried over; fires again 0.15 later
        assert!(!timer.update(0.1));
        assert!(timer.update(0.05));
    }
}

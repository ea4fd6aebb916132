//! # Cancellable Task Scheduler
//!
//! The explicit replacement for ambient timers. Every deferred behavior in
//! the engine (combo decay ticks, combo hard timeouts, staggered effect
//! launches) is armed here and returns a [`TaskHandle`]; the owning
//! component tracks its handles and cancels them on teardown. An orphaned
//! callback mutating state after its owner died is a bug class this design
//! removes outright.
//!
//! The scheduler stores no closures. [`Scheduler::update`] drains the tasks
//! that fired this tick and the caller matches handles against the ones it
//! armed - the same poll-driven shape as the rest of the engine.

use tracing::debug;

/// Identifier for an armed task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

/// An armed task.
#[derive(Debug, Clone)]
struct Task {
    /// Unique id, never reused within one scheduler.
    id: u64,
    /// Seconds until the next fire.
    remaining: f32,
    /// Re-arm interval for repeating tasks.
    interval: Option<f32>,
}

/// Tick-driven task list with explicit cancellation.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Armed tasks, unordered.
    tasks: Vec<Task>,
    /// Next id to hand out.
    next_id: u64,
    /// Handles that fired during the last update, drained by the caller.
    fired: Vec<TaskHandle>,
}

impl Scheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a one-shot task firing after `delay` seconds.
    pub fn after(&mut self, delay: f32) -> TaskHandle {
        self.arm(delay.max(0.0), None)
    }

    /// Arms a repeating task firing every `interval` seconds.
    ///
    /// Intervals are floored to a small positive value so a zero interval
    /// cannot spin the update loop.
    pub fn every(&mut self, interval: f32) -> TaskHandle {
        let interval = interval.max(1e-4);
        self.arm(interval, Some(interval))
    }

    fn arm(&mut self, delay: f32, interval: Option<f32>) -> TaskHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            remaining: delay,
            interval,
        });
        TaskHandle(id)
    }

    /// Cancels a task. Idempotent: cancelling a fired or unknown handle
    /// returns false and does nothing.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != handle.0);
        before != self.tasks.len()
    }

    /// Cancels everything. Call on teardown of the owning component.
    pub fn clear(&mut self) {
        if !self.tasks.is_empty() {
            debug!(cancelled = self.tasks.len(), "scheduler cleared");
        }
        self.tasks.clear();
        self.fired.clear();
    }

    /// True while the handle refers to an armed task.
    #[must_use]
    pub fn is_armed(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|task| task.id == handle.0)
    }

    /// Number of armed tasks.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.tasks.len()
    }

    /// Advances time by `dt` seconds and returns the handles that fired.
    ///
    /// Repeating tasks appear once per elapsed interval; one-shots are
    /// removed after firing. Fire order within a tick follows arm order.
    pub fn update(&mut self, dt: f32) -> &[TaskHandle] {
        self.fired.clear();

        for task in &mut self.tasks {
            task.remaining -= dt;
            while task.remaining <= 0.0 {
                self.fired.push(TaskHandle(task.id));
                match task.interval {
                    Some(interval) => task.remaining += interval,
                    None => break,
                }
            }
        }

        self.tasks
            .retain(|task| task.interval.is_some() || task.remaining > 0.0);

        &self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut scheduler = Scheduler::new();
        let h = scheduler.after(0.5);

        assert!(scheduler.update(0.3).is_empty());
        assert_eq!(scheduler.update(0.3), &[h]);
        assert!(scheduler.update(10.0).is_empty());
        assert!(!scheduler.is_armed(h));
    }

    #[test]
    fn test_repeating_fires_per_interval() {
        let mut scheduler = Scheduler::new();
        let h = scheduler.every(0.1);

        // One big step spanning three intervals fires three times
        let fired: Vec<_> = scheduler.update(0.35).to_vec();
        assert_eq!(fired, vec![h, h, h]);
        assert!(scheduler.is_armed(h));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut scheduler = Scheduler::new();
        let h = scheduler.after(1.0);

        assert!(scheduler.cancel(h));
        assert!(!scheduler.cancel(h));
        assert!(scheduler.update(2.0).is_empty());
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut scheduler = Scheduler::new();
        let keep = scheduler.after(0.1);
        let drop_me = scheduler.after(0.1);
        scheduler.cancel(drop_me);

        assert_eq!(scheduler.update(0.2), &[keep]);
    }

    #[test]
    fn test_clear_cancels_all() {
        let mut scheduler = Scheduler::new();
        let _ = scheduler.after(0.1);
        let _ = scheduler.every(0.1);

        scheduler.clear();
        assert_eq!(scheduler.armed_count(), 0);
        assert!(scheduler.update(1.0).is_empty());
    }

    #[test]
    fn test_fire_order_follows_arm_order() {
        let mut scheduler = Scheduler::new();
        let a = scheduler.after(0.1);
        let b = scheduler.after(0.05);

        // Both due in the same tick; arm order wins, not deadline order
        assert_eq!(scheduler.update(0.2), &[a, b]);
    }
}

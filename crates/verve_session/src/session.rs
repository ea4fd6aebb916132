//! The game session state machine.
//!
//! Phases move one way per run: `Idle -> Playing -> Ended`, with `start()`
//! beginning the next run. All combo timing is driven by the core
//! scheduler through `update(dt)`; there is no wall clock anywhere.

use tracing::{debug, info};
use verve_core::math::Vec2;
use verve_core::scheduler::{Scheduler, TaskHandle};

use crate::store::ScoreStore;

/// Combo gauge value set on every increment.
const COMBO_TIMER_FULL: f32 = 100.0;

/// Decay fires this many times across the combo window.
const DECAY_STEPS: u32 = 20;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// No run in progress.
    #[default]
    Idle,
    /// A run is live; scoring and combos are accepted.
    Playing,
    /// The run finished; waiting for the next `start()`.
    Ended,
}

/// End-of-run results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Final score.
    pub score: u32,
    /// Highest combo reached during the run.
    pub max_combo: u32,
    /// Soft currency awarded for the run.
    pub currency_earned: u32,
    /// Whether this run set a new high score.
    pub is_high_score: bool,
}

/// Something the session did that the outer layers may want to react to.
///
/// The session never talks to effects or feedback directly; it records
/// events and the context drains and routes them each tick.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// Points were awarded (after the combo multiplier).
    ScoreAdded {
        /// Points actually added.
        amount: u32,
        /// Where the scoring action happened.
        position: Vec2,
    },
    /// The combo counter changed upward.
    ComboChanged {
        /// New combo level.
        level: u32,
        /// Where the combo action happened.
        position: Vec2,
    },
    /// The combo expired or was broken.
    ComboDropped {
        /// Level the combo held before dropping.
        level: u32,
    },
    /// The run finished.
    Ended {
        /// Final results.
        summary: SessionSummary,
    },
}

/// One game run: score, combo, and the timers that decay it.
#[derive(Debug)]
pub struct GameSession {
    /// Which game's high score this session competes against.
    game_id: String,
    /// Lifecycle phase.
    phase: SessionPhase,
    /// Current score.
    score: u32,
    /// Current combo level.
    combo: u32,
    /// Highest combo this run.
    max_combo: u32,
    /// Decaying combo gauge, `[0, 100]`.
    combo_timer: f32,
    /// Full combo window in milliseconds.
    combo_window_ms: f32,
    /// High score loaded at `start()`.
    high_score: u32,
    /// Drives combo decay and timeout.
    scheduler: Scheduler,
    /// Armed decay interval, cancelled before re-arming.
    decay_handle: Option<TaskHandle>,
    /// Armed hard timeout, cancelled before re-arming.
    timeout_handle: Option<TaskHandle>,
    /// Events since the last drain.
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Session for a game with the default 3-second combo window.
    #[must_use]
    pub fn new(game_id: impl Into<String>) -> Self {
        Self::with_combo_window(game_id, 3000.0)
    }

    /// Session with an explicit combo window in milliseconds.
    #[must_use]
    pub fn with_combo_window(game_id: impl Into<String>, combo_window_ms: f32) -> Self {
        Self {
            game_id: game_id.into(),
            phase: SessionPhase::Idle,
            score: 0,
            combo: 0,
            max_combo: 0,
            combo_timer: 0.0,
            combo_window_ms: combo_window_ms.max(1.0),
            high_score: 0,
            scheduler: Scheduler::new(),
            decay_handle: None,
            timeout_handle: None,
            events: Vec::new(),
        }
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current combo level.
    #[must_use]
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Combo gauge in `[0, 100]`; drains across the combo window.
    #[must_use]
    pub fn combo_timer(&self) -> f32 {
        self.combo_timer
    }

    /// High score on record when the run started.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Begins a run: zeroes score and combo, loads the stored high score.
    pub fn start(&mut self, store: &dyn ScoreStore) {
        self.cancel_combo_timers();
        self.score = 0;
        self.combo = 0;
        self.max_combo = 0;
        self.combo_timer = 0.0;
        self.high_score = store.get(&self.game_id);
        self.phase = SessionPhase::Playing;
        self.events.clear();
        debug!(game_id = %self.game_id, high_score = self.high_score, "session started");
    }

    /// Awards points, applying the combo multiplier.
    ///
    /// The multiplier is `1 + combo/10` once a combo of 2+ is running, and
    /// the result is rounded. Outside `Playing` this is a no-op.
    pub fn add_score(&mut self, points: u32, position: Vec2) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let multiplier = if self.combo > 1 {
            1.0 + self.combo as f32 / 10.0
        } else {
            1.0
        };
        let awarded = (points as f32 * multiplier).round() as u32;
        self.score += awarded;
        self.events.push(SessionEvent::ScoreAdded {
            amount: awarded,
            position,
        });
    }

    /// Bumps the combo and re-arms its decay and hard timeout.
    ///
    /// The previous handles are cancelled first, so a rapid chain keeps
    /// exactly one decay interval and one timeout armed.
    pub fn increment_combo(&mut self, position: Vec2) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
        self.combo_timer = COMBO_TIMER_FULL;

        self.cancel_combo_timers();
        let window_s = self.combo_window_ms / 1000.0;
        self.decay_handle = Some(self.scheduler.every(window_s / DECAY_STEPS as f32));
        self.timeout_handle = Some(self.scheduler.after(window_s));

        self.events.push(SessionEvent::ComboChanged {
            level: self.combo,
            position,
        });
    }

    /// Breaks the combo: cancels both timers and zeroes the counter.
    pub fn reset_combo(&mut self) {
        self.cancel_combo_timers();
        if self.combo > 0 {
            self.events.push(SessionEvent::ComboDropped { level: self.combo });
        }
        self.combo = 0;
        self.combo_timer = 0.0;
    }

    /// Advances session time, draining the decay gauge.
    ///
    /// The gauge reaching zero is what breaks the combo; the hard timeout
    /// is a backstop for the same window.
    pub fn update(&mut self, dt: f32) {
        if self.phase != SessionPhase::Playing {
            return;
        }
        let fired: Vec<TaskHandle> = self.scheduler.update(dt).to_vec();
        for handle in fired {
            if Some(handle) == self.decay_handle {
                self.combo_timer =
                    (self.combo_timer - COMBO_TIMER_FULL / DECAY_STEPS as f32).max(0.0);
                if self.combo_timer <= 0.0 && self.combo > 0 {
                    debug!(combo = self.combo, "combo gauge drained");
                    self.reset_combo();
                }
            } else if Some(handle) == self.timeout_handle {
                if self.combo > 0 {
                    debug!(combo = self.combo, "combo window elapsed");
                }
                self.reset_combo();
            }
        }
    }

    /// Ends the run and settles it against the store.
    ///
    /// Currency is `score / 10`, plus 50 for a new high score. The store
    /// is written only when the score is strictly greater than the record.
    /// Returns `None` when no run is in progress, so a double `end()` is
    /// harmless.
    pub fn end(&mut self, store: &mut dyn ScoreStore) -> Option<SessionSummary> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        self.cancel_combo_timers();
        self.phase = SessionPhase::Ended;

        let is_high_score = self.score > self.high_score;
        if is_high_score {
            if let Err(err) = store.set(&self.game_id, self.score) {
                tracing::warn!(game_id = %self.game_id, error = %err, "high score write failed");
            }
            self.high_score = self.score;
        }

        let currency_earned = self.score / 10 + if is_high_score { 50 } else { 0 };
        let summary = SessionSummary {
            score: self.score,
            max_combo: self.max_combo,
            currency_earned,
            is_high_score,
        };
        info!(
            game_id = %self.game_id,
            score = summary.score,
            max_combo = summary.max_combo,
            currency = summary.currency_earned,
            is_high_score,
            "session ended"
        );
        self.events.push(SessionEvent::Ended { summary });
        Some(summary)
    }

    /// Takes every event recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cancels all armed timers and drops pending events.
    pub fn teardown(&mut self) {
        self.cancel_combo_timers();
        self.scheduler.clear();
        self.events.clear();
    }

    /// True while any combo timer is armed.
    #[must_use]
    pub fn has_armed_timers(&self) -> bool {
        self.scheduler.armed_count() > 0
    }

    fn cancel_combo_timers(&mut self) {
        if let Some(handle) = self.decay_handle.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = self.timeout_handle.take() {
            self.scheduler.cancel(handle);
        }
    }
}

//! # VERVE Session
//!
//! The game session state machine: score, combo, and high-score settlement.
//!
//! ## Design Principles
//!
//! 1. **Scheduler-driven time** - combo decay and timeout run on the core
//!    scheduler, so tests drive a session on a fully simulated clock
//! 2. **Events out, never calls out** - the session records
//!    [`SessionEvent`]s; routing to effects and feedback belongs to the
//!    context that owns both
//! 3. **Persistence behind a trait** - [`ScoreStore`] hides where scores
//!    live; malformed stored values read as 0 instead of failing a run

pub mod session;
pub mod store;

pub use session::{GameSession, SessionEvent, SessionPhase, SessionSummary};
pub use store::{MemoryScoreStore, ScoreStore, StoreError, TomlScoreStore};

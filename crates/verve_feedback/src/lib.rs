//! # VERVE Feedback
//!
//! Haptic and audio dispatch for game feel.
//!
//! ## Design Principles
//!
//! 1. **Degrade silently** - unsupported devices, disabled haptics, and
//!    muted audio all no-op; feedback is garnish, never load-bearing
//! 2. **Traits at the device seam** - [`Vibrator`] and [`AudioSink`] are
//!    the only way out of this crate, so every path is testable off-device
//! 3. **One call, both channels** - the dispatcher fires sound then haptic
//!    in the same call frame so they always land together

pub mod audio;
pub mod dispatcher;
pub mod haptics;

pub use audio::{AudioSink, NullAudio, RecordingAudio, SoundCue};
pub use dispatcher::FeedbackDispatcher;
pub use haptics::{
    combo_tier, escalating_pattern, HapticManager, HapticPattern, NullVibrator, PatternError,
    PatternTable, RecordingVibrator, Vibrator,
};

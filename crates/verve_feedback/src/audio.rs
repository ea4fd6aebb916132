//! Sound cue vocabulary and the sink trait consumers implement.
//!
//! The engine never decodes or mixes audio. It names moments; the host's
//! [`AudioSink`] maps each cue to an actual asset.

use std::sync::Arc;

use parking_lot::Mutex;

/// A named audio moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A point was scored.
    Score,
    /// Combo reached the first tier.
    ComboLow,
    /// Combo reached the middle tier.
    ComboMid,
    /// Combo reached the high tier.
    ComboHigh,
    /// Combo reached the maximum tier.
    ComboMax,
    /// A mid-run milestone was crossed.
    Milestone,
    /// An achievement unlocked.
    Achievement,
    /// The run ended with a new high score.
    HighScore,
    /// The run ended.
    GameOver,
}

impl SoundCue {
    /// Cue for a combo level, `None` below the first tier.
    #[must_use]
    pub fn for_combo(level: u32) -> Option<Self> {
        match level {
            0 | 1 => None,
            2 | 3 => Some(Self::ComboLow),
            4..=6 => Some(Self::ComboMid),
            7..=9 => Some(Self::ComboHigh),
            _ => Some(Self::ComboMax),
        }
    }
}

/// Host-side audio playback.
pub trait AudioSink {
    /// Plays the asset mapped to a cue.
    fn play(&mut self, cue: SoundCue);
}

/// A sink that discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Test double that records every played cue. Clones share the log.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    /// Shared log of played cues.
    played: Arc<Mutex<Vec<SoundCue>>>,
}

impl RecordingAudio {
    /// Snapshot of every cue played so far.
    #[must_use]
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.lock().clone()
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.played.lock().push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_cue_thresholds() {
        assert_eq!(SoundCue::for_combo(1), None);
        assert_eq!(SoundCue::for_combo(2), Some(SoundCue::ComboLow));
        assert_eq!(SoundCue::for_combo(5), Some(SoundCue::ComboMid));
        assert_eq!(SoundCue::for_combo(8), Some(SoundCue::ComboHigh));
        assert_eq!(SoundCue::for_combo(15), Some(SoundCue::ComboMax));
    }

    #[test]
    fn test_recording_audio_shares_log_across_clones() {
        let recorder = RecordingAudio::default();
        let mut sink = recorder.clone();
        sink.play(SoundCue::Score);
        sink.play(SoundCue::GameOver);
        assert_eq!(recorder.played(), vec![SoundCue::Score, SoundCue::GameOver]);
    }
}

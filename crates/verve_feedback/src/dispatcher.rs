//! The combined feedback surface.
//!
//! Game code calls one method per moment; the dispatcher fires the sound
//! cue and then the haptic in the same call frame so the two always land
//! together.

use crate::audio::{AudioSink, SoundCue};
use crate::haptics::{HapticManager, Vibrator};

/// Routes game moments to audio and haptics.
pub struct FeedbackDispatcher {
    /// Haptic policy and device access.
    haptics: HapticManager,
    /// Host audio playback.
    audio: Box<dyn AudioSink + Send>,
    /// Audio mute toggle; haptics have their own toggle on the manager.
    muted: bool,
}

impl std::fmt::Debug for FeedbackDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackDispatcher")
            .field("haptics", &self.haptics)
            .field("muted", &self.muted)
            .finish_non_exhaustive()
    }
}

impl FeedbackDispatcher {
    /// Creates a dispatcher over the given device endpoints.
    #[must_use]
    pub fn new(vibrator: Box<dyn Vibrator + Send>, audio: Box<dyn AudioSink + Send>) -> Self {
        Self {
            haptics: HapticManager::new(vibrator),
            audio,
            muted: false,
        }
    }

    /// Haptic policy access (enable, intensity, pattern table).
    pub fn haptics_mut(&mut self) -> &mut HapticManager {
        &mut self.haptics
    }

    /// Mutes or unmutes sound cues.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// True when sound cues are suppressed.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    fn play(&mut self, cue: SoundCue) {
        if !self.muted {
            self.audio.play(cue);
        }
    }

    /// A point was scored.
    pub fn score(&mut self) {
        self.play(SoundCue::Score);
        self.haptics.trigger("tap");
    }

    /// Combo reached `level`. Below the first tier nothing fires.
    pub fn combo(&mut self, level: u32) {
        if let Some(cue) = SoundCue::for_combo(level) {
            self.play(cue);
        }
        self.haptics.combo(level);
    }

    /// A mid-run milestone was crossed.
    pub fn milestone(&mut self) {
        self.play(SoundCue::Milestone);
        self.haptics.trigger("success");
    }

    /// An achievement unlocked.
    pub fn achievement(&mut self) {
        self.play(SoundCue::Achievement);
        self.haptics.trigger("success");
    }

    /// The run ended with a new high score.
    pub fn high_score(&mut self) {
        self.play(SoundCue::HighScore);
        self.haptics.trigger("high-score");
    }

    /// The run ended.
    pub fn game_over(&mut self) {
        self.play(SoundCue::GameOver);
        self.haptics.trigger("game-over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::haptics::RecordingVibrator;

    fn dispatcher() -> (FeedbackDispatcher, RecordingVibrator, RecordingAudio) {
        let vibe = RecordingVibrator::default();
        let audio = RecordingAudio::default();
        let dispatcher =
            FeedbackDispatcher::new(Box::new(vibe.clone()), Box::new(audio.clone()));
        (dispatcher, vibe, audio)
    }

    #[test]
    fn test_score_fires_sound_and_haptic() {
        let (mut d, vibe, audio) = dispatcher();
        d.score();
        assert_eq!(audio.played(), vec![SoundCue::Score]);
        assert_eq!(vibe.calls().len(), 1);
    }

    #[test]
    fn test_combo_below_tier_is_silent() {
        let (mut d, vibe, audio) = dispatcher();
        d.combo(1);
        assert!(audio.played().is_empty());
        assert!(vibe.calls().is_empty());
    }

    #[test]
    fn test_combo_four_hits_middle_tier() {
        let (mut d, vibe, audio) = dispatcher();
        d.combo(4);
        assert_eq!(audio.played(), vec![SoundCue::ComboMid]);
        // combo-2 pattern at full intensity
        assert_eq!(vibe.calls(), vec![vec![15, 30, 15]]);
    }

    #[test]
    fn test_mute_silences_audio_but_not_haptics() {
        let (mut d, vibe, audio) = dispatcher();
        d.set_muted(true);
        d.game_over();
        assert!(audio.played().is_empty());
        assert_eq!(vibe.calls().len(), 1);
    }
}

use std::time::Duration;

use kidplay_core::model::{RateSmoothing, ScorePolicy};

/// Feedback-display delays between an attempt and the next transition.
///
/// The child needs time to absorb the audio and visual confirmation, so
/// the advance delay is longer than the retry delay. Hosts whose TTS
/// collaborator reports completion can shorten both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTiming {
    pub advance_delay: Duration,
    pub retry_delay: Duration,
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self {
            advance_delay: Duration::from_millis(1500),
            retry_delay: Duration::from_millis(1000),
        }
    }
}

impl FeedbackTiming {
    /// Zero delays, for tests driving the loop synchronously.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            advance_delay: Duration::ZERO,
            retry_delay: Duration::ZERO,
        }
    }
}

/// Narration language and speaking rate, applied once per session start.
#[derive(Debug, Clone, PartialEq)]
pub struct NarrationSettings {
    pub language: String,
    pub rate: f32,
}

impl Default for NarrationSettings {
    fn default() -> Self {
        // slowed-down speech for young listeners
        Self {
            language: "en-US".into(),
            rate: 0.8,
        }
    }
}

/// Everything that varies between the mini-games: one of these per game,
/// alongside a round generator. The engine itself is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub game_type: String,
    pub rounds_total: u32,
    pub score_policy: ScorePolicy,
    pub rate_smoothing: RateSmoothing,
    pub timing: FeedbackTiming,
    pub narration: NarrationSettings,
}

impl GameConfig {
    #[must_use]
    pub fn new(game_type: impl Into<String>, rounds_total: u32) -> Self {
        Self {
            game_type: game_type.into(),
            rounds_total,
            score_policy: ScorePolicy::default(),
            rate_smoothing: RateSmoothing::default(),
            timing: FeedbackTiming::default(),
            narration: NarrationSettings::default(),
        }
    }

    #[must_use]
    pub fn with_score_policy(mut self, policy: ScorePolicy) -> Self {
        self.score_policy = policy;
        self
    }

    #[must_use]
    pub fn with_rate_smoothing(mut self, smoothing: RateSmoothing) -> Self {
        self.rate_smoothing = smoothing;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, timing: FeedbackTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn with_narration(mut self, narration: NarrationSettings) -> Self {
        self.narration = narration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builders_apply() {
        let config = GameConfig::new("color_match", 10)
            .with_score_policy(ScorePolicy::DeductFloorZero)
            .with_timing(FeedbackTiming::immediate());

        assert_eq!(config.game_type, "color_match");
        assert_eq!(config.rounds_total, 10);
        assert_eq!(config.score_policy, ScorePolicy::DeductFloorZero);
        assert_eq!(config.timing.advance_delay, Duration::ZERO);
    }
}

//! Thin sequencer over the external text-to-speech collaborator.

use std::sync::Arc;

use crate::config::NarrationSettings;
use crate::error::NarrationError;

/// External narration collaborator: fire-and-forget audio playback.
///
/// `speak` hands the utterance to the audio layer and returns without
/// waiting for playback; `stop` cuts the current utterance short.
pub trait NarrationEngine: Send + Sync {
    /// Apply language and speaking rate. Called once per session start.
    ///
    /// # Errors
    ///
    /// Returns `NarrationError` if the backend rejects the settings.
    fn configure(&self, settings: &NarrationSettings) -> Result<(), NarrationError>;

    /// Begin speaking the given text.
    ///
    /// # Errors
    ///
    /// Returns `NarrationError` if playback cannot start.
    fn speak(&self, text: &str) -> Result<(), NarrationError>;

    /// Stop the current utterance, if any.
    ///
    /// # Errors
    ///
    /// Returns `NarrationError` if the backend fails to stop.
    fn stop(&self) -> Result<(), NarrationError>;
}

const PRAISE: &str = "Well done!";
const TRY_AGAIN: &str = "Oops, try again!";

/// Interrupt-then-speak sequencer tied to engine state transitions.
///
/// Every utterance stops whatever is playing before speaking; nothing is
/// queued. The engine's retry/advance timers run independently of
/// narration, so an utterance can be cut off by the next prompt. All
/// narration failures are logged and swallowed so audio problems never
/// block the child's flow.
pub struct FeedbackNarrator {
    engine: Arc<dyn NarrationEngine>,
}

impl FeedbackNarrator {
    /// Wrap the collaborator and apply the session's narration settings.
    #[must_use]
    pub fn new(engine: Arc<dyn NarrationEngine>, settings: &NarrationSettings) -> Self {
        if let Err(err) = engine.configure(settings) {
            log::warn!("narration configure failed: {err}");
        }
        Self { engine }
    }

    /// Interrupt the current utterance and speak `text`.
    pub fn say(&self, text: &str) {
        if let Err(err) = self.engine.stop() {
            log::warn!("narration stop failed: {err}");
        }
        if let Err(err) = self.engine.speak(text) {
            log::warn!("narration speak failed: {err}");
        }
    }

    /// Read out a round prompt.
    pub fn announce(&self, prompt: &str) {
        self.say(prompt);
    }

    pub fn praise(&self) {
        self.say(PRAISE);
    }

    pub fn try_again(&self) {
        self.say(TRY_AGAIN);
    }

    /// Read out the end-of-game line.
    pub fn completion(&self, score: u32, max_score: u32) {
        self.say(&completion_line(score, max_score));
    }

    /// Stop narration on session teardown.
    pub fn silence(&self) {
        if let Err(err) = self.engine.stop() {
            log::warn!("narration stop failed: {err}");
        }
    }
}

/// The message shown and spoken on the completion summary.
#[must_use]
pub fn completion_line(score: u32, max_score: u32) -> String {
    format!("Great job! You got {score} out of {max_score}!")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

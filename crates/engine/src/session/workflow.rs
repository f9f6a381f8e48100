//! Orchestrates one mini-game session from first prompt to hand-off.

use std::sync::Arc;

use kidplay_core::Clock;
use kidplay_core::model::SessionLaunch;

use super::engine::{PendingTransition, Resolution, RoundEngine, Submission};
use super::finalize::SessionFinalizer;
use super::generate::RoundGenerator;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::input::AttemptSubmitted;
use crate::narrator::{FeedbackNarrator, NarrationEngine, completion_line};
use crate::navigate::{CompletionNavigator, CompletionSummary};
use crate::sink::{GameResultRecord, ResultSink};

/// What one submit cycle amounted to, after feedback resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReport {
    /// Input was dropped by the busy engine; nothing changed.
    Ignored,
    /// Wrong answer; the same round is open again.
    Retry,
    /// Correct answer; the next round is open and announced.
    Advanced,
    /// Correct answer on the last round; the session finalized and
    /// control was handed off. `record` is what was reported (None when
    /// the child has no backend identity).
    Completed { record: Option<GameResultRecord> },
}

/// Drives one session: judge, narrate, wait out the feedback display,
/// transition, and on completion finalize and hand off control.
///
/// Collaborators are injected so tests can substitute fakes and assert
/// sequencing deterministically.
pub struct GameLoopService {
    config: GameConfig,
    launch: SessionLaunch,
    generator: Arc<dyn RoundGenerator>,
    narrator: FeedbackNarrator,
    finalizer: SessionFinalizer,
    navigator: CompletionNavigator,
    clock: Clock,
}

impl GameLoopService {
    #[must_use]
    pub fn new(
        config: GameConfig,
        launch: SessionLaunch,
        generator: Arc<dyn RoundGenerator>,
        narration: Arc<dyn NarrationEngine>,
        sink: Arc<dyn ResultSink>,
        navigator: CompletionNavigator,
        clock: Clock,
    ) -> Self {
        let narrator = FeedbackNarrator::new(narration, &config.narration);
        let finalizer = SessionFinalizer::new(sink, clock);
        Self {
            config,
            launch,
            generator,
            narrator,
            finalizer,
            navigator,
            clock,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the engine for this game and announce the first prompt.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` when the game has no rounds or round 0 fails
    /// validation.
    pub fn start(&self) -> Result<RoundEngine, EngineError> {
        let engine = RoundEngine::start(
            self.config.rounds_total,
            self.generator.clone(),
            self.config.score_policy,
            self.clock,
        )?;
        self.narrator.announce(engine.current_round().prompt());
        Ok(engine)
    }

    /// Run one full attempt cycle for a normalized input signal.
    ///
    /// Judges the attempt, narrates the feedback, waits out the
    /// feedback-display delay, then applies the scheduled transition. On
    /// the terminal transition the finalizer runs first (best-effort) and
    /// the completion navigator is invoked exactly once, strictly after it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError` if the next round fails validation.
    pub async fn submit(
        &mut self,
        engine: &mut RoundEngine,
        signal: AttemptSubmitted,
    ) -> Result<SubmitReport, EngineError> {
        let Submission::Judged { attempt, pending } = engine.submit_attempt(signal.candidate)
        else {
            return Ok(SubmitReport::Ignored);
        };

        if attempt.outcome.is_correct() {
            self.narrator.praise();
        } else {
            self.narrator.try_again();
        }

        let delay = match pending {
            PendingTransition::Retry => self.config.timing.retry_delay,
            PendingTransition::Advance | PendingTransition::Finalize => {
                self.config.timing.advance_delay
            }
        };
        tokio::time::sleep(delay).await;

        match engine.resolve_feedback()? {
            Resolution::Retry => Ok(SubmitReport::Retry),
            Resolution::NextRound => {
                self.narrator.announce(engine.current_round().prompt());
                Ok(SubmitReport::Advanced)
            }
            Resolution::Finalized => {
                let metrics = engine.metrics().clone();
                let record = self
                    .finalizer
                    .finalize(
                        &metrics,
                        &self.launch.child,
                        &self.config.game_type,
                        self.config.rate_smoothing,
                        None,
                    )
                    .await;

                let summary = CompletionSummary {
                    score: metrics.score(),
                    max_score: metrics.max_score(),
                    message: completion_line(metrics.score(), metrics.max_score()),
                };
                self.narrator.completion(metrics.score(), metrics.max_score());
                self.navigator.complete(summary);

                Ok(SubmitReport::Completed { record })
            }
        }
    }

    /// Restart the session in place and announce round 0 again.
    ///
    /// # Errors
    ///
    /// Propagates validation failures from the regenerated first round.
    pub fn replay(&self, engine: &mut RoundEngine) -> Result<(), EngineError> {
        engine.reset()?;
        self.narrator.announce(engine.current_round().prompt());
        Ok(())
    }

    /// Session teardown: stop narration explicitly.
    ///
    /// A pending feedback delay or in-flight result submission is not
    /// awaited or cancelled here; it is dropped together with its future
    /// when the host releases the session.
    pub fn teardown(&self) {
        self.narrator.silence();
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeedbackTiming;
    use crate::input::TapSelector;
    use crate::navigate::{NavParams, Navigator};
    use crate::session::generate::FixedRounds;
    use crate::sink::InMemoryResultSink;
    use kidplay_core::model::{
        AnswerRule, Candidate, CandidateId, ChildId, ChildProfile, RoundSpec, ScreenId,
    };
    use kidplay_core::time::fixed_clock;
    use std::sync::Mutex;

    struct SilentNarration;

    impl NarrationEngine for SilentNarration {
        fn configure(
            &self,
            _settings: &crate::config::NarrationSettings,
        ) -> Result<(), crate::error::NarrationError> {
            Ok(())
        }
        fn speak(&self, _text: &str) -> Result<(), crate::error::NarrationError> {
            Ok(())
        }
        fn stop(&self) -> Result<(), crate::error::NarrationError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        calls: Mutex<Vec<(String, NavParams)>>,
    }

    impl Navigator for RecordingNavigator {
        fn replace(&self, screen: &ScreenId, params: NavParams) {
            self.calls
                .lock()
                .unwrap()
                .push((screen.as_str().to_string(), params));
        }
    }

    fn two_candidate_spec() -> RoundSpec {
        RoundSpec {
            prompt: "Find the red ball".into(),
            candidates: vec![
                Candidate::new(CandidateId::new(1), "red ball"),
                Candidate::new(CandidateId::new(2), "blue ball"),
            ],
            rule: AnswerRule::Exact(CandidateId::new(1)),
        }
    }

    fn service(
        rounds: u32,
        sink: InMemoryResultSink,
        shell: Arc<RecordingNavigator>,
    ) -> GameLoopService {
        let launch = SessionLaunch::solo(ChildProfile::new(Some(ChildId::new(9)), 1, "Mai"));
        let config = GameConfig::new("color_match", rounds).with_timing(FeedbackTiming::immediate());
        let navigator =
            CompletionNavigator::new(shell, launch.clone(), ScreenId::new("CategoryMenu"));
        GameLoopService::new(
            config,
            launch,
            Arc::new(FixedRounds::new(vec![two_candidate_spec()])),
            Arc::new(SilentNarration),
            Arc::new(sink),
            navigator,
            fixed_clock(),
        )
    }

    #[tokio::test]
    async fn full_session_reports_and_navigates_once() {
        let sink = InMemoryResultSink::new();
        let shell = Arc::new(RecordingNavigator::default());
        let mut service = service(2, sink.clone(), shell.clone());
        let mut engine = service.start().unwrap();

        let report = service
            .submit(&mut engine, AttemptSubmitted { candidate: CandidateId::new(1) })
            .await
            .unwrap();
        assert_eq!(report, SubmitReport::Advanced);

        let report = service
            .submit(&mut engine, AttemptSubmitted { candidate: CandidateId::new(1) })
            .await
            .unwrap();
        assert!(matches!(report, SubmitReport::Completed { record: Some(_) }));

        assert_eq!(sink.records().len(), 1);
        assert_eq!(shell.calls.lock().unwrap().len(), 1);
        assert!(engine.is_finalized());
    }

    #[tokio::test]
    async fn wrong_answer_retries_the_same_round() {
        let sink = InMemoryResultSink::new();
        let shell = Arc::new(RecordingNavigator::default());
        let mut service = service(2, sink.clone(), shell);
        let mut engine = service.start().unwrap();

        let report = service
            .submit(&mut engine, AttemptSubmitted { candidate: CandidateId::new(2) })
            .await
            .unwrap();
        assert_eq!(report, SubmitReport::Retry);
        assert_eq!(engine.current_round().index(), 0);
        assert_eq!(engine.metrics().wrong_count(), 1);
        assert!(sink.records().is_empty());
    }

    #[tokio::test]
    async fn input_after_finalize_is_ignored() {
        let sink = InMemoryResultSink::new();
        let shell = Arc::new(RecordingNavigator::default());
        let mut service = service(1, sink.clone(), shell.clone());
        let mut engine = service.start().unwrap();

        service
            .submit(&mut engine, AttemptSubmitted { candidate: CandidateId::new(1) })
            .await
            .unwrap();
        let report = service
            .submit(&mut engine, AttemptSubmitted { candidate: CandidateId::new(1) })
            .await
            .unwrap();

        assert_eq!(report, SubmitReport::Ignored);
        assert_eq!(sink.records().len(), 1, "finalized exactly once");
        assert_eq!(shell.calls.lock().unwrap().len(), 1, "navigated exactly once");
    }

    #[tokio::test]
    async fn replay_restarts_after_a_partial_run() {
        let sink = InMemoryResultSink::new();
        let shell = Arc::new(RecordingNavigator::default());
        let mut service = service(3, sink, shell);
        let mut engine = service.start().unwrap();

        service
            .submit(&mut engine, AttemptSubmitted { candidate: CandidateId::new(1) })
            .await
            .unwrap();
        assert_eq!(engine.current_round().index(), 1);

        service.replay(&mut engine).unwrap();
        assert_eq!(engine.current_round().index(), 0);
        assert_eq!(engine.metrics().score(), 0);
    }

    #[tokio::test]
    async fn tap_selector_reenabled_after_each_cycle_drives_a_session() {
        let sink = InMemoryResultSink::new();
        let shell = Arc::new(RecordingNavigator::default());
        let mut service = service(2, sink, shell);
        let mut engine = service.start().unwrap();
        let mut taps = TapSelector::new();

        while !engine.is_finalized() {
            let signal = taps.press(CandidateId::new(1)).expect("selector enabled");
            service.submit(&mut engine, signal).await.unwrap();
            // controls re-enable exactly when the engine leaves its busy phase
            taps.set_enabled(!engine.is_busy() && !engine.is_finalized());
        }
        assert!(taps.press(CandidateId::new(1)).is_none());
    }
}

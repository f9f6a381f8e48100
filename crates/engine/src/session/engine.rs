//! The round-and-completion state machine shared by every mini-game.

use std::fmt;
use std::sync::Arc;

use kidplay_core::Clock;
use kidplay_core::model::{
    Attempt, AttemptOutcome, CandidateId, Round, ScorePolicy, SessionMetrics,
};

use super::generate::RoundGenerator;
use super::progress::SessionProgress;
use crate::error::EngineError;

//
// ─── TRANSITIONS ───────────────────────────────────────────────────────────────
//

/// Transition scheduled behind the feedback-display delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingTransition {
    /// Return to the same round unchanged. There is no per-round retry
    /// limit and no auto-skip.
    Retry,
    /// Generate and open the next round.
    Advance,
    /// The last round was judged correct; the session is over.
    Finalize,
}

/// What the feedback delay resolved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Retry,
    NextRound,
    Finalized,
}

/// Outcome of a submit call.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Input arrived while feedback was displaying or after finalization;
    /// dropped without judging, so at most one outcome is scored per
    /// round-cycle even under rapid double input.
    Ignored,
    Judged {
        attempt: Attempt,
        pending: PendingTransition,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Answering,
    Feedback(PendingTransition),
    Finalized,
}

//
// ─── ROUND ENGINE ──────────────────────────────────────────────────────────────
//

/// State machine for one play-through of a mini-game: owns the active
/// round, judges attempts, mutates the session metrics, and decides
/// retry vs. advance vs. finalize.
///
/// The engine is synchronous; the workflow layer owns the feedback timers
/// and calls `resolve_feedback` when they elapse.
pub struct RoundEngine {
    rounds_total: u32,
    generator: Arc<dyn RoundGenerator>,
    current: Round,
    attempts_in_round: u32,
    metrics: SessionMetrics,
    score_policy: ScorePolicy,
    phase: Phase,
    clock: Clock,
}

impl RoundEngine {
    /// Initialize round 0 from the generator and zeroed metrics.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoRounds` for a zero-round game and
    /// propagates round validation failures.
    pub fn start(
        rounds_total: u32,
        generator: Arc<dyn RoundGenerator>,
        score_policy: ScorePolicy,
        clock: Clock,
    ) -> Result<Self, EngineError> {
        if rounds_total == 0 {
            return Err(EngineError::NoRounds);
        }

        let current = Round::new(0, generator.generate(0))?;
        let metrics = SessionMetrics::start(rounds_total, clock.now());

        Ok(Self {
            rounds_total,
            generator,
            current,
            attempts_in_round: 0,
            metrics,
            score_policy,
            phase: Phase::Answering,
            clock,
        })
    }

    #[must_use]
    pub fn current_round(&self) -> &Round {
        &self.current
    }

    #[must_use]
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    #[must_use]
    pub fn rounds_total(&self) -> u32 {
        self.rounds_total
    }

    /// True while feedback is displaying and input is ignored.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Feedback(_))
    }

    #[must_use]
    pub fn is_finalized(&self) -> bool {
        matches!(self.phase, Phase::Finalized)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.rounds_total,
            completed: self.metrics.rounds_completed(),
            remaining: self.rounds_total - self.metrics.rounds_completed(),
            is_finalized: self.is_finalized(),
        }
    }

    /// Judge a normalized attempt against the active round.
    ///
    /// While busy or finalized this is an idempotent no-op returning
    /// `Submission::Ignored`. Otherwise the attempt is scored and the
    /// engine enters its feedback phase with the scheduled transition.
    pub fn submit_attempt(&mut self, candidate: CandidateId) -> Submission {
        if self.phase != Phase::Answering {
            return Submission::Ignored;
        }

        let outcome = self.current.judge(candidate);
        let first_for_round = self.attempts_in_round == 0;
        self.attempts_in_round += 1;

        let pending = match outcome {
            AttemptOutcome::Correct => {
                self.metrics.record_correct(first_for_round);
                if self.current.index() + 1 >= self.rounds_total {
                    PendingTransition::Finalize
                } else {
                    PendingTransition::Advance
                }
            }
            AttemptOutcome::Incorrect => {
                self.metrics.record_incorrect(self.score_policy, first_for_round);
                PendingTransition::Retry
            }
        };

        self.phase = Phase::Feedback(pending);

        Submission::Judged {
            attempt: Attempt {
                candidate_id: candidate,
                submitted_at: self.clock.now(),
                outcome,
            },
            pending,
        }
    }

    /// Apply the scheduled transition once the feedback delay elapses.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NotInFeedback` when no transition is pending,
    /// and propagates validation failures from the next generated round.
    pub fn resolve_feedback(&mut self) -> Result<Resolution, EngineError> {
        let Phase::Feedback(pending) = self.phase else {
            return Err(EngineError::NotInFeedback);
        };

        match pending {
            PendingTransition::Retry => {
                self.phase = Phase::Answering;
                Ok(Resolution::Retry)
            }
            PendingTransition::Advance => {
                let index = self.current.index() + 1;
                self.current = Round::new(index, self.generator.generate(index))?;
                self.attempts_in_round = 0;
                self.phase = Phase::Answering;
                Ok(Resolution::NextRound)
            }
            PendingTransition::Finalize => {
                self.phase = Phase::Finalized;
                Ok(Resolution::Finalized)
            }
        }
    }

    /// Restore round 0 and zeroed metrics (the "replay" affordance).
    ///
    /// # Errors
    ///
    /// Propagates validation failures from the regenerated first round.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.current = Round::new(0, self.generator.generate(0))?;
        self.attempts_in_round = 0;
        self.metrics = SessionMetrics::start(self.rounds_total, self.clock.now());
        self.phase = Phase::Answering;
        Ok(())
    }
}

impl fmt::Debug for RoundEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundEngine")
            .field("rounds_total", &self.rounds_total)
            .field("round_index", &self.current.index())
            .field("phase", &self.phase)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//
// ─── POLICIES ──────────────────────────────────────────────────────────────────
//

/// How an incorrect attempt affects the score. Policy differs per game:
/// most leave the score untouched, some decrement and floor at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScorePolicy {
    #[default]
    KeepOnWrong,
    DeductFloorZero,
}

/// Whether the success-rate formula applies "+1" smoothing to numerator
/// and denominator. Smoothing sidesteps division by zero and counts the
/// round that just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RateSmoothing {
    #[default]
    None,
    PlusOne,
}

//
// ─── SESSION METRICS ───────────────────────────────────────────────────────────
//

/// Running counters for one play-through of a mini-game.
///
/// `answered_count` counts rounds that have received at least one attempt
/// and never exceeds `rounds_total`; `rounds_completed` counts rounds
/// judged correct; `wrong_count` is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetrics {
    score: u32,
    wrong_count: u32,
    answered_count: u32,
    rounds_completed: u32,
    rounds_total: u32,
    started_at: DateTime<Utc>,
}

impl SessionMetrics {
    /// Zeroed counters for a session of `rounds_total` rounds.
    #[must_use]
    pub fn start(rounds_total: u32, started_at: DateTime<Utc>) -> Self {
        Self {
            score: 0,
            wrong_count: 0,
            answered_count: 0,
            rounds_completed: 0,
            rounds_total,
            started_at,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.answered_count
    }

    #[must_use]
    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    #[must_use]
    pub fn rounds_total(&self) -> u32 {
        self.rounds_total
    }

    /// One point per round; the ceiling for `score`.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.rounds_total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Credit a correct attempt.
    pub fn record_correct(&mut self, first_for_round: bool) {
        self.note_attempt(first_for_round);
        self.score = self.score.saturating_add(1);
        self.rounds_completed = self.rounds_completed.saturating_add(1);
    }

    /// Debit an incorrect attempt according to the game's score policy.
    pub fn record_incorrect(&mut self, policy: ScorePolicy, first_for_round: bool) {
        self.note_attempt(first_for_round);
        self.wrong_count = self.wrong_count.saturating_add(1);
        if policy == ScorePolicy::DeductFloorZero {
            self.score = self.score.saturating_sub(1);
        }
    }

    fn note_attempt(&mut self, first_for_round: bool) {
        if first_for_round && self.answered_count < self.rounds_total {
            self.answered_count += 1;
        }
    }

    /// Whole seconds elapsed since the session started.
    #[must_use]
    pub fn duration_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_seconds().max(0)
    }

    /// Percentage of scored attempts that were correct, in `[0, 100]`.
    #[must_use]
    pub fn success_rate(&self, smoothing: RateSmoothing) -> u32 {
        let (num, den) = match smoothing {
            RateSmoothing::None => (self.score, self.score + self.wrong_count),
            RateSmoothing::PlusOne => (self.score + 1, self.score + self.wrong_count + 1),
        };
        if den == 0 {
            return 100;
        }
        (f64::from(num) / f64::from(den) * 100.0).round() as u32
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn metrics(total: u32) -> SessionMetrics {
        SessionMetrics::start(total, fixed_now())
    }

    #[test]
    fn correct_adds_exactly_one_point() {
        let mut m = metrics(5);
        m.record_correct(true);
        assert_eq!(m.score(), 1);
        assert_eq!(m.wrong_count(), 0);
        assert_eq!(m.rounds_completed(), 1);
    }

    #[test]
    fn incorrect_never_increases_score() {
        let mut m = metrics(5);
        m.record_incorrect(ScorePolicy::KeepOnWrong, true);
        assert_eq!(m.score(), 0);
        assert_eq!(m.wrong_count(), 1);

        m.record_incorrect(ScorePolicy::DeductFloorZero, false);
        assert_eq!(m.score(), 0, "deduct policy floors at zero");
        assert_eq!(m.wrong_count(), 2);
    }

    #[test]
    fn deduct_policy_floors_at_zero() {
        let mut m = metrics(5);
        m.record_correct(true);
        m.record_incorrect(ScorePolicy::DeductFloorZero, true);
        m.record_incorrect(ScorePolicy::DeductFloorZero, false);
        assert_eq!(m.score(), 0);
    }

    #[test]
    fn answered_count_never_exceeds_total() {
        let mut m = metrics(2);
        m.record_incorrect(ScorePolicy::KeepOnWrong, true);
        m.record_correct(false);
        m.record_correct(true);
        // a stray extra first-attempt can never push past the total
        m.record_correct(true);
        assert!(m.answered_count() <= m.rounds_total());
        assert_eq!(m.answered_count(), 2);
    }

    #[test]
    fn success_rate_is_bounded_for_all_pairs() {
        for score in 0..20 {
            for wrong in 0..20 {
                let mut m = metrics(20);
                for _ in 0..score {
                    m.record_correct(true);
                }
                for _ in 0..wrong {
                    m.record_incorrect(ScorePolicy::KeepOnWrong, false);
                }
                for smoothing in [RateSmoothing::None, RateSmoothing::PlusOne] {
                    let rate = m.success_rate(smoothing);
                    assert!(rate <= 100, "rate {rate} out of range for {score}/{wrong}");
                }
            }
        }
    }

    #[test]
    fn success_rate_handles_zero_attempts() {
        let m = metrics(5);
        assert_eq!(m.success_rate(RateSmoothing::None), 100);
        assert_eq!(m.success_rate(RateSmoothing::PlusOne), 100);
    }

    #[test]
    fn success_rate_matches_known_values() {
        let mut m = metrics(10);
        for _ in 0..8 {
            m.record_correct(true);
        }
        for _ in 0..2 {
            m.record_incorrect(ScorePolicy::KeepOnWrong, false);
        }
        assert_eq!(m.success_rate(RateSmoothing::None), 80);
        // (8 + 1) / (8 + 2 + 1) = 81.8 → 82
        assert_eq!(m.success_rate(RateSmoothing::PlusOne), 82);
    }

    #[test]
    fn duration_counts_whole_seconds() {
        let m = metrics(5);
        let later = m.started_at() + chrono::Duration::milliseconds(42_600);
        assert_eq!(m.duration_seconds(later), 42);
        assert_eq!(m.duration_seconds(m.started_at()), 0);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::CandidateId;

/// Judged outcome of a single submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    Correct,
    Incorrect,
}

impl AttemptOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AttemptOutcome::Correct)
    }
}

/// Record of a single answer submission within a round.
///
/// One is created per normalized input event; attempts arriving while the
/// engine displays feedback are dropped before this record is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub candidate_id: CandidateId,
    pub submitted_at: DateTime<Utc>,
    pub outcome: AttemptOutcome,
}

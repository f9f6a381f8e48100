use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::model::attempt::AttemptOutcome;
use crate::model::candidate::Candidate;
use crate::model::ids::CandidateId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("round has no candidates")]
    NoCandidates,

    #[error("duplicate candidate id in option set: {0}")]
    DuplicateCandidate(CandidateId),

    #[error("no candidate satisfies the accepted-answer rule")]
    MissingAnswer,
}

//
// ─── ANSWER RULE ───────────────────────────────────────────────────────────────
//

/// Predicate deciding which submitted candidates count as correct.
///
/// Matching games accept a single exact id; sorting and categorization
/// games accept any candidate whose semantic group equals the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerRule {
    Exact(CandidateId),
    Group(String),
}

impl AnswerRule {
    #[must_use]
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        match self {
            AnswerRule::Exact(id) => candidate.id() == *id,
            AnswerRule::Group(group) => candidate.group() == Some(group.as_str()),
        }
    }
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// Generator output for one round, before the engine assigns an index.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSpec {
    pub prompt: String,
    pub candidates: Vec<Candidate>,
    pub rule: AnswerRule,
}

/// One prompt-and-judge cycle within a session. Exactly one round is
/// active at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    index: u32,
    prompt: String,
    candidates: Vec<Candidate>,
    rule: AnswerRule,
}

impl Round {
    /// Build a round from a generated spec.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::NoCandidates` for an empty option set,
    /// `RoundError::DuplicateCandidate` if an id repeats, and
    /// `RoundError::MissingAnswer` if no candidate satisfies the rule.
    pub fn new(index: u32, spec: RoundSpec) -> Result<Self, RoundError> {
        if spec.candidates.is_empty() {
            return Err(RoundError::NoCandidates);
        }

        let mut seen = HashSet::new();
        for candidate in &spec.candidates {
            if !seen.insert(candidate.id()) {
                return Err(RoundError::DuplicateCandidate(candidate.id()));
            }
        }

        if !spec.candidates.iter().any(|c| spec.rule.accepts(c)) {
            return Err(RoundError::MissingAnswer);
        }

        Ok(Self {
            index,
            prompt: spec.prompt,
            candidates: spec.candidates,
            rule: spec.rule,
        })
    }

    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn rule(&self) -> &AnswerRule {
        &self.rule
    }

    /// Judge a submitted candidate id against the accepted-answer rule.
    ///
    /// An id that is not among this round's candidates judges incorrect.
    #[must_use]
    pub fn judge(&self, candidate_id: CandidateId) -> AttemptOutcome {
        let accepted = self
            .candidates
            .iter()
            .find(|c| c.id() == candidate_id)
            .is_some_and(|c| self.rule.accepts(c));

        if accepted {
            AttemptOutcome::Correct
        } else {
            AttemptOutcome::Incorrect
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

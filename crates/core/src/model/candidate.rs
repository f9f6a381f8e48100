use serde::{Deserialize, Serialize};

use crate::model::ids::CandidateId;

/// A selectable or draggable option a child can submit as an answer.
///
/// `group` carries the semantic attribute a group-matching rule tests
/// against: the color of a ball, the category of an animal, the shape of
/// a block. Options without a semantic grouping leave it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    id: CandidateId,
    label: String,
    group: Option<String>,
}

impl Candidate {
    #[must_use]
    pub fn new(id: CandidateId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            group: None,
        }
    }

    /// Attach the semantic group this candidate belongs to.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> CandidateId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

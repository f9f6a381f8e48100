use serde::{Deserialize, Serialize};

use crate::model::ids::ChildId;

/// Player identity supplied by the hosting shell at session launch.
///
/// The engine reads only `id` and `level`; `id` is absent for guest play,
/// in which case result submission is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    id: Option<ChildId>,
    level: u32,
    name: String,
}

impl ChildProfile {
    #[must_use]
    pub fn new(id: Option<ChildId>, level: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            level,
            name: name.into(),
        }
    }

    /// Convenience constructor for guest play without a backend identity.
    #[must_use]
    pub fn guest(level: u32, name: impl Into<String>) -> Self {
        Self::new(None, level, name)
    }

    #[must_use]
    pub fn id(&self) -> Option<ChildId> {
        self.id
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_has_no_backend_identity() {
        let child = ChildProfile::guest(1, "Mai");
        assert_eq!(child.id(), None);
        assert_eq!(child.level(), 1);
        assert_eq!(child.name(), "Mai");
    }
}

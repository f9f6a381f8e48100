/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: u32,
    pub completed: u32,
    pub remaining: u32,
    pub is_finalized: bool,
}

/// Aggregated view of practice progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeProgress {
    pub total: usize,
    pub answered: usize,
    /// 1-based position of the current question.
    pub position: usize,
    pub score: u32,
    pub max_score: u32,
    pub is_complete: bool,
}

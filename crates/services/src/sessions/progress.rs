/// Aggregated view of answer collection for the active question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerProgress {
    pub expected: usize,
    pub collected: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

use serde::Serialize;

/// Intermediate values of the overall score, kept for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub weighted_base: i32,
    pub content_signals: usize,
    pub content_bonus: i32,
    pub floor_applied: bool,
    pub reputation_bonus: i32,
    pub overall: u8,
}

use crate::score::{calculate_skin_score_with, score_category, unrecognized_issues, ScoringOptions};
use crate::types::issue::SkinIssue;
use crate::types::scoring::{ScoreBreakdown, ScoreCategory};
use serde::Serialize;

/// Everything a caller shows for one scoring run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    pub category: ScoreCategory,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

impl ScoreReport {
    pub fn build(issues: &[SkinIssue], options: &ScoringOptions) -> Self {
        let breakdown = calculate_skin_score_with(issues, options);
        let category = score_category(breakdown.final_score);
        let skipped = unrecognized_issues(issues)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            breakdown,
            category,
            skipped,
        }
    }
}

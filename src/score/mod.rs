pub mod category;
pub mod improvement;
pub mod severity;
pub mod validation;
pub mod weights;

pub use category::score_category;
pub use improvement::calculate_improvement;
pub use severity::classify_severity;
pub use validation::validate_issues;

use crate::types::issue::{IssueName, SkinIssue};
use crate::types::scoring::{Deduction, Score, ScoreBreakdown, BASE_SCORE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringOptions {
    /// Clamp severities into 0-100 before the zero check and classification.
    pub clamp_severity: bool,
}

/// Scores a snapshot of detected issues. Never fails: undetected, zero
/// severity and unrecognized issues contribute nothing.
pub fn calculate_skin_score(issues: &[SkinIssue]) -> ScoreBreakdown {
    calculate_skin_score_with(issues, &ScoringOptions::default())
}

pub fn calculate_skin_score_with(issues: &[SkinIssue], options: &ScoringOptions) -> ScoreBreakdown {
    let mut deductions = Vec::new();

    for issue in issues {
        let severity = effective_severity(issue, options);
        if !issue.detected || severity == 0.0 {
            continue;
        }
        let name = match issue.name.parse::<IssueName>() {
            Ok(name) => name,
            Err(err) => {
                tracing::debug!(%err, "skipping issue without a deduction weight");
                continue;
            }
        };
        let level = classify_severity(severity);
        let amount = weights::deduction_weight(name, level);
        tracing::trace!(issue = %name, ?level, amount, "deduction");
        deductions.push(Deduction {
            issue: name,
            amount,
        });
    }

    let total: u32 = deductions.iter().map(|deduction| deduction.amount).sum();
    let final_score = Score::try_from(total)
        .map(|total| (BASE_SCORE - total).max(0))
        .unwrap_or(0);

    ScoreBreakdown {
        base_score: BASE_SCORE,
        deductions,
        final_score,
    }
}

/// Names of detected, non-zero issues that the engine dropped because their
/// label is not one of the known conditions.
pub fn unrecognized_issues(issues: &[SkinIssue]) -> Vec<&str> {
    issues
        .iter()
        .filter(|issue| issue.detected && issue.severity != 0.0)
        .filter(|issue| issue.name.parse::<IssueName>().is_err())
        .map(|issue| issue.name.as_str())
        .collect()
}

fn effective_severity(issue: &SkinIssue, options: &ScoringOptions) -> f64 {
    if options.clamp_severity {
        issue.severity.clamp(0.0, 100.0)
    } else {
        issue.severity
    }
}

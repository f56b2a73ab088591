use crate::history::TrendSummary;
use crate::types::report::ScoreReport;
use crate::types::scoring::{Improvement, Score, ScoreCategory};

pub fn to_markdown(report: &ScoreReport) -> String {
    let breakdown = &report.breakdown;
    let mut output = String::new();
    output.push_str("# Skin Score Report\n\n");
    output.push_str(&format!(
        "Skin score: {}/{} ({})\n\n{}\n\n",
        breakdown.final_score,
        breakdown.base_score,
        report.category.category,
        report.category.description
    ));

    output.push_str("## Deductions\n\n");
    if breakdown.deductions.is_empty() {
        output.push_str("- none\n");
    } else {
        for deduction in &breakdown.deductions {
            output.push_str(&format!("- {}: -{}\n", deduction.issue, deduction.amount));
        }
        output.push_str(&format!("\nTotal deducted: {}\n", breakdown.total_deductions()));
    }

    if !report.skipped.is_empty() {
        output.push_str("\n## Skipped\n\n");
        for name in &report.skipped {
            output.push_str(&format!("- {name} (unrecognized issue)\n"));
        }
    }

    output
}

pub fn category_to_markdown(score: Score, category: &ScoreCategory) -> String {
    format!(
        "Skin score {}: {} ({})\n{}",
        score, category.category, category.color, category.description
    )
}

pub fn improvement_to_markdown(improvement: &Improvement) -> String {
    format!(
        "{}\n- change: {}{}%",
        improvement.message,
        if improvement.improved { "+" } else { "-" },
        improvement.percentage
    )
}

pub fn trend_to_markdown(summary: &TrendSummary) -> String {
    let mut output = String::new();
    output.push_str("# Skin Score Trend\n\n");
    output.push_str(&format!(
        "Latest: {} ({}) on {}\n\n",
        summary.latest.score,
        summary.latest_category.category,
        summary.latest.taken_at.format("%Y-%m-%d")
    ));
    output.push_str(&format!(
        "- scans: {}\n- best: {}\n- worst: {}\n- average: {:.1}\n",
        summary.scans, summary.best, summary.worst, summary.average
    ));
    if let Some(improvement) = &summary.improvement {
        output.push_str(&format!("\n{}\n", improvement.message));
    }
    output
}

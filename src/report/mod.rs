pub mod json;
pub mod md;

use crate::error::SkinScoreError;
use crate::history::TrendSummary;
use crate::types::report::ScoreReport;
use crate::types::scoring::{Improvement, Score, ScoreCategory};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Md,
}

impl FromStr for OutputFormat {
    type Err = SkinScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "md" => Ok(OutputFormat::Md),
            other => Err(SkinScoreError::ConfigParse(format!(
                "unsupported report.format: {other}"
            ))),
        }
    }
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, SkinScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(SkinScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_category(
    score: Score,
    category: &ScoreCategory,
    format: OutputFormat,
) -> Result<String, SkinScoreError> {
    match format {
        OutputFormat::Json => json::category_to_json(score, category).map_err(SkinScoreError::Json),
        OutputFormat::Md => Ok(md::category_to_markdown(score, category)),
    }
}

pub fn render_improvement(
    improvement: &Improvement,
    format: OutputFormat,
) -> Result<String, SkinScoreError> {
    match format {
        OutputFormat::Json => json::to_json(improvement).map_err(SkinScoreError::Json),
        OutputFormat::Md => Ok(md::improvement_to_markdown(improvement)),
    }
}

pub fn render_trend(summary: &TrendSummary, format: OutputFormat) -> Result<String, SkinScoreError> {
    match format {
        OutputFormat::Json => json::to_json(summary).map_err(SkinScoreError::Json),
        OutputFormat::Md => Ok(md::trend_to_markdown(summary)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parses_known_names() {
        assert_eq!("json".parse::<OutputFormat>().expect("json"), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().expect("md"), OutputFormat::Md);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }
}

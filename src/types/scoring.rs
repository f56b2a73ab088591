use crate::types::issue::IssueName;
use serde::Serialize;

pub type Score = i32;

pub const BASE_SCORE: Score = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deduction {
    pub issue: IssueName,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base_score: Score,
    pub deductions: Vec<Deduction>,
    pub final_score: Score,
}

impl ScoreBreakdown {
    pub fn total_deductions(&self) -> u32 {
        self.deductions.iter().map(|deduction| deduction.amount).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreCategory {
    pub category: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Improvement {
    /// Magnitude only; direction is carried by `improved` and `message`.
    pub percentage: u32,
    pub improved: bool,
    pub message: String,
}

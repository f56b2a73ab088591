//! Skin score derivation.
//!
//! Converts skin issues detected by an external vision analysis into a 0-100
//! health score with an itemized deduction breakdown, a qualitative category,
//! and the improvement between two historical scores.

pub mod config;
pub mod error;
pub mod history;
pub mod report;
pub mod score;
pub mod types;

pub use error::{Result, SkinScoreError};
pub use score::{
    calculate_improvement, calculate_skin_score, calculate_skin_score_with, classify_severity,
    score_category, ScoringOptions,
};

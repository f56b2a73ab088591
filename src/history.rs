use crate::error::{Result, SkinScoreError};
use crate::score::{calculate_improvement, score_category};
use crate::types::scoring::{Improvement, Score, ScoreCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A persisted scan: only the final score survives a scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRecord {
    pub taken_at: DateTime<Utc>,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    pub scans: usize,
    pub latest: ScanRecord,
    pub latest_category: ScoreCategory,
    pub best: Score,
    pub worst: Score,
    pub average: f64,
    /// Change from the second-latest scan; absent with a single scan.
    pub improvement: Option<Improvement>,
}

pub fn load_history(path: &Path) -> Result<Vec<ScanRecord>> {
    if !path.exists() {
        return Err(SkinScoreError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let records: Vec<ScanRecord> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), scans = records.len(), "loaded scan history");
    Ok(records)
}

pub fn summarize(records: &[ScanRecord]) -> Result<Option<TrendSummary>> {
    let mut ordered = records.to_vec();
    ordered.sort_by_key(|record| record.taken_at);

    let Some(latest) = ordered.last().cloned() else {
        return Ok(None);
    };

    let improvement = match ordered.len() {
        0 | 1 => None,
        n => Some(calculate_improvement(ordered[n - 2].score, latest.score)?),
    };

    let scores = ordered.iter().map(|record| record.score);
    let best = scores.clone().max().unwrap_or(latest.score);
    let worst = scores.clone().min().unwrap_or(latest.score);
    let sum: i64 = scores.map(i64::from).sum();
    let average = (sum as f64 / ordered.len() as f64 * 10.0).round() / 10.0;

    Ok(Some(TrendSummary {
        scans: ordered.len(),
        latest_category: score_category(latest.score),
        latest,
        best,
        worst,
        average,
        improvement,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn scan(day: u32, score: Score) -> ScanRecord {
        ScanRecord {
            taken_at: Utc
                .with_ymd_and_hms(2026, 3, day, 9, 0, 0)
                .single()
                .expect("valid timestamp"),
            score,
        }
    }

    #[test]
    fn summarize_empty_history_is_none() {
        assert!(summarize(&[]).expect("summarize should succeed").is_none());
    }

    #[test]
    fn summarize_single_scan_has_no_improvement() {
        let summary = summarize(&[scan(1, 72)])
            .expect("summarize should succeed")
            .expect("summary should exist");
        assert_eq!(summary.scans, 1);
        assert_eq!(summary.latest_category.category, "Good");
        assert!(summary.improvement.is_none());
    }

    #[test]
    fn summarize_orders_by_timestamp_before_comparing() {
        let records = vec![scan(9, 60), scan(2, 41), scan(5, 50)];
        let summary = summarize(&records)
            .expect("summarize should succeed")
            .expect("summary should exist");

        assert_eq!(summary.latest.score, 60);
        assert_eq!(summary.best, 60);
        assert_eq!(summary.worst, 41);
        assert_eq!(summary.average, 50.3);
        let improvement = summary.improvement.expect("two or more scans");
        assert_eq!(improvement.percentage, 20);
        assert_eq!(improvement.message, "Your skin improved by 20%!");
    }

    #[test]
    fn summarize_rejects_negative_previous_score() {
        let result = summarize(&[scan(1, -5), scan(2, 40)]);
        assert!(matches!(result, Err(SkinScoreError::InvalidScore(_))));
    }

    #[test]
    fn load_history_reads_camel_case_records() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"[{"takenAt": "2026-03-01T09:00:00Z", "score": 55},
                {"takenAt": "2026-03-08T09:00:00Z", "score": 61}]"#,
        )
        .expect("history should write");

        let records = load_history(&path).expect("history should load");
        assert_eq!(records, vec![scan(1, 55), scan(8, 61)]);
    }

    #[test]
    fn load_history_missing_file_is_path_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let err = load_history(&dir.path().join("missing.json")).expect_err("should fail");
        assert!(matches!(err, SkinScoreError::PathNotFound(_)));
    }
}

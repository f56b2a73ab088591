use crate::error::{Result, SkinScoreError};
use crate::types::scoring::{Improvement, Score};

/// Differences smaller than this are reported as stable regardless of sign.
pub const STABLE_BAND: Score = 3;

/// Compares two historical scores.
///
/// The percentage is relative to `previous` and is zero when `previous` is
/// zero. A negative `previous` cannot come out of the engine and is rejected.
pub fn calculate_improvement(previous: Score, current: Score) -> Result<Improvement> {
    if previous < 0 {
        return Err(SkinScoreError::InvalidScore(format!(
            "previous score must be non-negative (found {previous})"
        )));
    }

    let difference = i64::from(current) - i64::from(previous);
    let percentage = if previous > 0 {
        round_half_up(difference as f64 / f64::from(previous) * 100.0)
    } else {
        0
    };
    let percentage = u32::try_from(percentage.unsigned_abs()).unwrap_or(u32::MAX);
    let improved = difference > 0;

    let message = if difference.abs() < i64::from(STABLE_BAND) {
        "Your skin score is stable".to_string()
    } else if improved {
        format!("Your skin improved by {percentage}%!")
    } else {
        format!("Your skin score decreased by {percentage}%")
    };

    Ok(Improvement {
        percentage,
        improved,
        message,
    })
}

// Halves round toward positive infinity, so -12.5 becomes -12.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improvement_reports_percentage_and_message() {
        let result = calculate_improvement(50, 60).expect("valid scores");
        assert_eq!(result.percentage, 20);
        assert!(result.improved);
        assert_eq!(result.message, "Your skin improved by 20%!");
    }

    #[test]
    fn small_difference_is_stable_even_when_improved() {
        let result = calculate_improvement(70, 72).expect("valid scores");
        assert!(result.improved);
        assert_eq!(result.percentage, 3);
        assert_eq!(result.message, "Your skin score is stable");
    }

    #[test]
    fn decrease_reports_non_negative_percentage() {
        let result = calculate_improvement(80, 60).expect("valid scores");
        assert!(!result.improved);
        assert_eq!(result.percentage, 25);
        assert_eq!(result.message, "Your skin score decreased by 25%");
    }

    #[test]
    fn equal_scores_are_not_improved() {
        let result = calculate_improvement(64, 64).expect("valid scores");
        assert!(!result.improved);
        assert_eq!(result.percentage, 0);
        assert_eq!(result.message, "Your skin score is stable");
    }

    #[test]
    fn zero_previous_score_yields_zero_percentage() {
        let result = calculate_improvement(0, 45).expect("valid scores");
        assert!(result.improved);
        assert_eq!(result.percentage, 0);
        assert_eq!(result.message, "Your skin improved by 0%!");
    }

    #[test]
    fn negative_half_percentages_round_toward_positive_infinity() {
        // -5 / 40 = -12.5% rounds to -12
        let result = calculate_improvement(40, 35).expect("valid scores");
        assert_eq!(result.percentage, 12);
        // +5 / 40 = 12.5% rounds to 13
        let result = calculate_improvement(40, 45).expect("valid scores");
        assert_eq!(result.percentage, 13);
    }

    #[test]
    fn negative_previous_score_is_rejected() {
        let result = calculate_improvement(-10, 50);
        assert!(matches!(result, Err(SkinScoreError::InvalidScore(_))));
    }
}

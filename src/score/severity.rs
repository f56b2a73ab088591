use crate::types::scoring::SeverityLevel;

pub const SEVERE_THRESHOLD: f64 = 70.0;
pub const MODERATE_THRESHOLD: f64 = 40.0;

/// Buckets a raw severity. Out-of-range values are not clamped: anything
/// below 40 (negatives included) is mild, anything from 70 up is severe.
pub fn classify_severity(severity: f64) -> SeverityLevel {
    if severity >= SEVERE_THRESHOLD {
        SeverityLevel::Severe
    } else if severity >= MODERATE_THRESHOLD {
        SeverityLevel::Moderate
    } else {
        SeverityLevel::Mild
    }
}

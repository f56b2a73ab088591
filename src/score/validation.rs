use crate::types::issue::{IssueName, SkinIssue};

/// Strict checks for callers that refuse malformed analysis output.
/// Returns all validation errors at once (not just the first).
pub fn validate_issues(issues: &[SkinIssue]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (i, issue) in issues.iter().enumerate() {
        if issue.name.parse::<IssueName>().is_err() {
            errors.push(format!(
                "issues[{}].name: unrecognized '{}'",
                i, issue.name
            ));
        }
        if !(0.0..=100.0).contains(&issue.severity) {
            errors.push(format!(
                "issues[{}].severity: {} outside 0-100",
                i, issue.severity
            ));
        }
        if !(0.0..=1.0).contains(&issue.confidence) {
            errors.push(format!(
                "issues[{}].confidence: {} outside 0.0-1.0",
                i, issue.confidence
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

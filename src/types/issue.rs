use crate::error::SkinScoreError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of skin conditions the vision analysis can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueName {
    #[serde(rename = "Acne & Breakouts")]
    Acne,
    #[serde(rename = "Dark Spots & Hyperpigmentation")]
    DarkSpots,
    #[serde(rename = "Fine Lines & Wrinkles")]
    FineLines,
    #[serde(rename = "Oiliness")]
    Oiliness,
    #[serde(rename = "Redness & Inflammation")]
    Redness,
    #[serde(rename = "Uneven Texture")]
    UnevenTexture,
}

impl IssueName {
    pub const ALL: [IssueName; 6] = [
        IssueName::Acne,
        IssueName::DarkSpots,
        IssueName::FineLines,
        IssueName::Oiliness,
        IssueName::Redness,
        IssueName::UnevenTexture,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueName::Acne => "Acne & Breakouts",
            IssueName::DarkSpots => "Dark Spots & Hyperpigmentation",
            IssueName::FineLines => "Fine Lines & Wrinkles",
            IssueName::Oiliness => "Oiliness",
            IssueName::Redness => "Redness & Inflammation",
            IssueName::UnevenTexture => "Uneven Texture",
        }
    }
}

impl fmt::Display for IssueName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueName {
    type Err = SkinScoreError;

    /// Exact, case-sensitive match against the known labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| SkinScoreError::UnknownIssue(s.to_string()))
    }
}

/// One observation as produced by the vision analysis.
///
/// The name stays a raw string: labels outside [`IssueName`] are tolerated and
/// skipped by the engine rather than rejected at parse time. Missing or `null`
/// fields fall back to their falsy defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkinIssue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detected: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub area: String,
}

impl SkinIssue {
    pub fn detected(name: &str, severity: f64) -> Self {
        Self {
            name: name.to_string(),
            severity,
            confidence: 1.0,
            detected: true,
            area: String::new(),
        }
    }
}

/// Accepted shapes for a scoring request: a bare array or an analysis envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnalysisInput {
    Issues(Vec<SkinIssue>),
    Analysis { issues: Vec<SkinIssue> },
}

impl AnalysisInput {
    pub fn into_issues(self) -> Vec<SkinIssue> {
        match self {
            AnalysisInput::Issues(issues) | AnalysisInput::Analysis { issues } => issues,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_name_parses_exact_labels_only() {
        assert_eq!(
            "Acne & Breakouts".parse::<IssueName>().expect("known label"),
            IssueName::Acne
        );
        assert!(matches!(
            "acne & breakouts".parse::<IssueName>(),
            Err(SkinScoreError::UnknownIssue(_))
        ));
        for name in IssueName::ALL {
            assert_eq!(name.as_str().parse::<IssueName>().expect("round trip"), name);
        }
    }

    #[test]
    fn issue_name_serializes_as_label() {
        let json = serde_json::to_string(&IssueName::DarkSpots).expect("should serialize");
        assert_eq!(json, "\"Dark Spots & Hyperpigmentation\"");
    }

    #[test]
    fn skin_issue_missing_and_null_fields_default_to_falsy() {
        let issue: SkinIssue =
            serde_json::from_str(r#"{"name": "Oiliness", "severity": null}"#)
                .expect("partial issue should parse");
        assert_eq!(issue.name, "Oiliness");
        assert_eq!(issue.severity, 0.0);
        assert!(!issue.detected);
        assert!(issue.area.is_empty());
    }

    #[test]
    fn analysis_input_accepts_array_and_envelope() {
        let bare: AnalysisInput =
            serde_json::from_str(r#"[{"name": "Oiliness", "severity": 50, "detected": true}]"#)
                .expect("array should parse");
        assert_eq!(bare.into_issues().len(), 1);

        let envelope: AnalysisInput = serde_json::from_str(
            r#"{"overallHealth": "good", "issues": [
                {"name": "Uneven Texture", "severity": 20, "confidence": 0.7,
                 "detected": true, "area": "cheeks"}
            ]}"#,
        )
        .expect("envelope should parse");
        let issues = envelope.into_issues();
        assert_eq!(issues[0].area, "cheeks");
        assert_eq!(issues[0].confidence, 0.7);
    }
}

use crate::error::SkinScoreError;
use crate::score::ScoringOptions;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkinScoreConfig {
    pub scoring: Option<ScoringConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Run strict input validation before scoring.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub clamp_severity: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "md".to_string()
}

impl SkinScoreConfig {
    pub fn strict(&self) -> bool {
        self.scoring.as_ref().is_some_and(|scoring| scoring.strict)
    }

    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            clamp_severity: self
                .scoring
                .as_ref()
                .is_some_and(|scoring| scoring.clamp_severity),
        }
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report.as_ref().map(|report| report.format.as_str())
    }

    pub fn validate(&self) -> Result<(), SkinScoreError> {
        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(SkinScoreError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: SkinScoreConfig = toml::from_str("").expect("empty config should parse");
        assert!(!cfg.strict());
        assert_eq!(cfg.scoring_options(), ScoringOptions::default());
        assert!(cfg.report_format().is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[scoring]
strict = true
clamp_severity = true

[report]
format = "json"
"#;
        let cfg: SkinScoreConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(cfg.strict());
        assert!(cfg.scoring_options().clamp_severity);
        assert_eq!(cfg.report_format(), Some("json"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn report_table_without_format_defaults_to_markdown() {
        let cfg: SkinScoreConfig = toml::from_str("[report]\n").expect("config should parse");
        assert_eq!(cfg.report_format(), Some("md"));
    }

    #[test]
    fn validate_rejects_unknown_report_format() {
        let cfg: SkinScoreConfig =
            toml::from_str("[report]\nformat = \"sarif\"\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported report.format: sarif"));
    }
}

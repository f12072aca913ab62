use super::severity::{IssueSeverity, IssueType};
use serde::{Deserialize, Serialize};

/// configuration for issue severity levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeverityConfig {
    /// severity for a note without any past-tense token
    #[serde(default = "SeverityConfig::default_not_past_tense")]
    pub not_past_tense: IssueSeverity,
    /// severity for a yaml file that failed to parse
    #[serde(default = "SeverityConfig::default_parse_failure")]
    pub parse_failure: IssueSeverity,
}

impl SeverityConfig {
    /// get severity for a specific issue type
    pub fn get_severity(&self, issue_type: IssueType) -> IssueSeverity {
        match issue_type {
            IssueType::NotPastTense => self.not_past_tense,
            IssueType::ParseFailure => self.parse_failure,
        }
    }

    fn default_not_past_tense() -> IssueSeverity {
        IssueSeverity::Error
    }

    fn default_parse_failure() -> IssueSeverity {
        IssueSeverity::Warning
    }
}

impl Default for SeverityConfig {
    fn default() -> Self {
        Self {
            not_past_tense: Self::default_not_past_tense(),
            parse_failure: Self::default_parse_failure(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_severities() {
        let config = SeverityConfig::default();
        assert_eq!(
            config.get_severity(IssueType::NotPastTense),
            IssueSeverity::Error
        );
        assert_eq!(
            config.get_severity(IssueType::ParseFailure),
            IssueSeverity::Warning
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SeverityConfig = toml::from_str("parse_failure = \"error\"").unwrap();
        assert_eq!(config.parse_failure, IssueSeverity::Error);
        assert_eq!(config.not_past_tense, IssueSeverity::Error);
    }
}

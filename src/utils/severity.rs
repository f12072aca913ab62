use serde::{Deserialize, Serialize};
use std::fmt;

/// severity level for issues detected while checking notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// error-level issue, fails the run under `--strict`
    Error,
    /// warning-level issue that is informational only
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueSeverity::Error => write!(f, "ERROR"),
            IssueSeverity::Warning => write!(f, "WARN"),
        }
    }
}

/// type of issue detected while checking notes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// note text carries no past-tense token
    NotPastTense,
    /// file could not be parsed as yaml
    ParseFailure,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::NotPastTense => write!(f, "not_past_tense"),
            IssueType::ParseFailure => write!(f, "parse_failure"),
        }
    }
}

/// structured issue with severity, type, and message
#[derive(Debug, Clone)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub issue_type: IssueType,
    /// human-readable message describing the issue
    pub message: String,
}

impl Issue {
    pub fn new(severity: IssueSeverity, issue_type: IssueType, message: String) -> Self {
        Self {
            severity,
            issue_type,
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == IssueSeverity::Warning
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

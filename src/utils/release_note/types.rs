// release note data structures

use crate::utils::severity::Issue;
use serde::Deserialize;

/// shape of the release note field inside a yaml document
///
/// ```yaml
/// releasenote: Fixed the login redirect.
/// ---
/// releasenote:
///   text: Fixed the login redirect.
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ReleaseNoteField {
    Plain(String),
    Structured(StructuredNote),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StructuredNote {
    pub text: String,
}

impl ReleaseNoteField {
    /// the sentence carried by the field, whichever shape it was written in
    pub fn into_text(self) -> String {
        match self {
            ReleaseNoteField::Plain(text) => text,
            ReleaseNoteField::Structured(note) => note.text,
        }
    }
}

/// outcome of checking a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteStatus {
    /// note contains at least one past-tense token
    Compliant { sentence: String },
    /// note contains no past-tense token
    NotPastTense { sentence: String },
    /// note contains an inline code span and was not classified
    CodeSpanExempt { sentence: String },
    /// file has no usable note field
    NoField,
    /// file could not be parsed as yaml
    ParseFailed { reason: String },
}

impl NoteStatus {
    pub fn is_violation(&self) -> bool {
        matches!(self, NoteStatus::NotPastTense { .. })
    }

    /// sentence that was looked at, if any
    pub fn sentence(&self) -> Option<&str> {
        match self {
            NoteStatus::Compliant { sentence }
            | NoteStatus::NotPastTense { sentence }
            | NoteStatus::CodeSpanExempt { sentence } => Some(sentence),
            NoteStatus::NoField | NoteStatus::ParseFailed { .. } => None,
        }
    }
}

/// per-file report produced by the checker
#[derive(Debug, Clone)]
pub struct NoteReport {
    /// file name relative to the scanned directory
    pub file_name: String,
    pub status: NoteStatus,
    pub issues: Vec<Issue>,
}

impl NoteReport {
    pub fn new(file_name: impl Into<String>, status: NoteStatus) -> Self {
        Self {
            file_name: file_name.into(),
            status,
            issues: Vec::new(),
        }
    }

    pub fn add_issue(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.iter().filter(|i| i.is_warning()).count()
    }
}

/// overall result of a directory scan, in scan order
#[derive(Debug, Clone)]
pub struct TenseAnalysis {
    /// field name that was checked, used when rendering diagnostics
    pub field_name: String,
    pub reports: Vec<NoteReport>,
    pub notes_checked: usize,
    pub total_violations: usize,
    pub total_issues: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl TenseAnalysis {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            reports: Vec::new(),
            notes_checked: 0,
            total_violations: 0,
            total_issues: 0,
            total_errors: 0,
            total_warnings: 0,
        }
    }

    pub fn add_report(&mut self, report: NoteReport) {
        if matches!(
            report.status,
            NoteStatus::Compliant { .. } | NoteStatus::NotPastTense { .. }
        ) {
            self.notes_checked += 1;
        }
        if report.status.is_violation() {
            self.total_violations += 1;
        }

        self.total_issues += report.issues.len();
        self.total_errors += report.error_count();
        self.total_warnings += report.warning_count();
        self.reports.push(report);
    }

    pub fn files_scanned(&self) -> usize {
        self.reports.len()
    }

    pub fn violations(&self) -> impl Iterator<Item = &NoteReport> {
        self.reports.iter().filter(|r| r.status.is_violation())
    }

    pub fn all_valid(&self) -> bool {
        self.total_violations == 0
    }

    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }
}

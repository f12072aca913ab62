use crate::error::{Error, Result};
use crate::utils::filesystem::{FilesystemExplorer, FsFile};
use crate::utils::nlp::{PartOfSpeechTagger, TenseClassifier};
use crate::utils::release_note::{
    NoteConfig, NoteReport, NoteStatus, ParseErrorPolicy, ReleaseNoteField, TenseAnalysis,
    contains_code_span, is_blank, read_note,
};
use crate::utils::severity::{Issue, IssueType};
use crate::utils::severity_config::SeverityConfig;
use std::fmt::Write as _;
use std::path::Path;

impl TenseAnalysis {
    /// diagnostics for every note that is not in past tense, in scan order
    pub fn render_diagnostics(&self) -> String {
        let mut output = String::new();
        for report in self.violations() {
            let sentence = report.status.sentence().unwrap_or_default();
            let _ = writeln!(
                output,
                "Error: Sentence in '{}' field of file '{}' is not in past tense:",
                self.field_name, report.file_name
            );
            let _ = writeln!(output, "{}", sentence);
            let _ = writeln!(output);
        }
        output
    }

    /// print diagnostics to stdout
    pub fn display_diagnostics(&self) {
        print!("{}", self.render_diagnostics());
    }

    pub fn render_summary(&self) -> String {
        let mut summary = format!(
            "checked {} note(s) in {} file(s): {} not in past tense",
            self.notes_checked,
            self.files_scanned(),
            self.total_violations
        );

        let skipped = self
            .reports
            .iter()
            .filter(|r| matches!(r.status, NoteStatus::ParseFailed { .. }))
            .count();
        if skipped > 0 {
            let _ = write!(summary, ", {} file(s) could not be parsed", skipped);
        }
        summary
    }

    pub fn display_summary(&self) {
        println!("{}", self.render_summary());
    }
}

/// checks a directory of release notes for past-tense phrasing
pub struct TenseChecker;

impl TenseChecker {
    /// classify the note of a single file
    ///
    /// parse and read failures are returned as errors, the caller decides
    /// whether they stop the scan
    pub fn check_file<P, T>(
        path: P,
        config: &NoteConfig,
        classifier: &TenseClassifier<T>,
    ) -> Result<NoteStatus>
    where
        P: AsRef<Path>,
        T: PartOfSpeechTagger,
    {
        let field = match read_note(path, &config.field_name)? {
            Some(field) => field,
            None => return Ok(NoteStatus::NoField),
        };

        // only the `text` mapping form is a note unless plain strings are opted in
        if matches!(field, ReleaseNoteField::Plain(_)) && !config.check_plain_text {
            log::debug!("'{}' is a plain string, not checked", config.field_name);
            return Ok(NoteStatus::NoField);
        }

        let sentence = field.into_text();
        if is_blank(&sentence) {
            return Ok(NoteStatus::NoField);
        }

        if config.exempt_code_spans && contains_code_span(&sentence) {
            return Ok(NoteStatus::CodeSpanExempt { sentence });
        }

        if classifier.is_past_tense(&sentence) {
            Ok(NoteStatus::Compliant { sentence })
        } else {
            Ok(NoteStatus::NotPastTense { sentence })
        }
    }

    /// check every yaml file directly inside a directory, in file name order
    pub fn check_directory<P, T>(
        directory: P,
        config: &NoteConfig,
        severity_config: &SeverityConfig,
        classifier: &TenseClassifier<T>,
    ) -> Result<TenseAnalysis>
    where
        P: AsRef<Path>,
        T: PartOfSpeechTagger,
    {
        let explorer = FilesystemExplorer::new(directory.as_ref());
        let files = explorer.list_files_matching(|name| config.matches_file_name(name))?;
        log::debug!(
            "found {} note file(s) in {}",
            files.len(),
            directory.as_ref().display()
        );

        let mut analysis = TenseAnalysis::new(config.field_name.clone());
        for file in files {
            let report = Self::check_entry(&file, config, severity_config, classifier)?;
            analysis.add_report(report);
        }

        Ok(analysis)
    }

    fn check_entry<T: PartOfSpeechTagger>(
        file: &FsFile,
        config: &NoteConfig,
        severity_config: &SeverityConfig,
        classifier: &TenseClassifier<T>,
    ) -> Result<NoteReport> {
        let status = match Self::check_file(&file.path, config, classifier) {
            Ok(status) => status,
            Err(e @ (Error::YamlParseError { .. } | Error::FileReadError { .. })) => {
                if config.on_parse_error == ParseErrorPolicy::Abort {
                    return Err(e);
                }
                log::warn!("skipping {}: {}", file.name, e);
                NoteStatus::ParseFailed {
                    reason: e.to_string(),
                }
            }
            Err(e) => return Err(e),
        };

        log::debug!("{}: {:?}", file.name, status);

        let mut report = NoteReport::new(file.name.clone(), status);
        let issue = match &report.status {
            NoteStatus::NotPastTense { .. } => Some((
                IssueType::NotPastTense,
                format!(
                    "{}: '{}' is not in past tense",
                    file.name, config.field_name
                ),
            )),
            NoteStatus::ParseFailed { reason } => Some((IssueType::ParseFailure, reason.clone())),
            _ => None,
        };

        if let Some((issue_type, message)) = issue {
            let severity = severity_config.get_severity(issue_type);
            let issue = Issue::new(severity, issue_type, message);
            log::debug!("recorded {}", issue);
            report.add_issue(issue);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::nlp::Tokenizer;
    use crate::utils::severity::IssueSeverity;
    use crate::utils::testing::{TestNote, TestNoteDirBuilder, TestScenario};

    /// tags words ending in "ed" as VBD, everything else as NN
    struct SuffixTagger;

    impl PartOfSpeechTagger for SuffixTagger {
        fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
            tokens
                .iter()
                .map(|t| {
                    let tag = if t.ends_with("ed") { "VBD" } else { "NN" };
                    (t.clone(), tag.to_string())
                })
                .collect()
        }
    }

    fn classifier() -> TenseClassifier<SuffixTagger> {
        TenseClassifier::new(Tokenizer::default(), SuffixTagger, &["VBD", "VBN"])
    }

    #[test]
    fn test_check_directory_reports_in_order() {
        let dir = TestNoteDirBuilder::new()
            .note(TestNote::structured("b.yaml", "releasenote", "Adds a flag."))
            .note(TestNote::structured("a.yml", "releasenote", "Removes a flag."))
            .note(TestNote::structured("c.yaml", "releasenote", "Renamed a flag."))
            .build()
            .unwrap();

        let analysis = TenseChecker::check_directory(
            dir.path(),
            &NoteConfig::default(),
            &SeverityConfig::default(),
            &classifier(),
        )
        .unwrap();

        let names: Vec<_> = analysis.violations().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, ["a.yml", "b.yaml"]);
        assert_eq!(analysis.notes_checked, 3);
        assert_eq!(analysis.total_errors, 2);
    }

    #[test]
    fn test_render_diagnostics_format() {
        let dir = TestNoteDirBuilder::new()
            .note(TestNote::structured("x.yaml", "releasenote", "Adds a flag."))
            .build()
            .unwrap();

        let analysis = TenseChecker::check_directory(
            dir.path(),
            &NoteConfig::default(),
            &SeverityConfig::default(),
            &classifier(),
        )
        .unwrap();

        assert_eq!(
            analysis.render_diagnostics(),
            "Error: Sentence in 'releasenote' field of file 'x.yaml' is not in past tense:\nAdds a flag.\n\n"
        );
    }

    #[test]
    fn test_code_span_is_exempt() {
        let dir = TestNoteDirBuilder::new()
            .note(TestNote::structured(
                "code.yaml",
                "releasenote",
                "Uses the `runCommand()` API to invoke builds.",
            ))
            .build()
            .unwrap();

        let status = TenseChecker::check_file(
            dir.path().join("code.yaml"),
            &NoteConfig::default(),
            &classifier(),
        )
        .unwrap();
        assert!(matches!(status, NoteStatus::CodeSpanExempt { .. }));

        let status = TenseChecker::check_file(
            dir.path().join("code.yaml"),
            &NoteConfig::default().exempt_code_spans(false),
            &classifier(),
        )
        .unwrap();
        assert!(status.is_violation());
    }

    #[test]
    fn test_plain_string_skipped_unless_enabled() {
        let dir = TestNoteDirBuilder::new()
            .note(TestNote::plain("plain.yaml", "releasenote", "Adds a flag."))
            .build()
            .unwrap();

        let analysis = TenseChecker::check_directory(
            dir.path(),
            &NoteConfig::default(),
            &SeverityConfig::default(),
            &classifier(),
        )
        .unwrap();
        assert_eq!(analysis.reports[0].status, NoteStatus::NoField);
        assert_eq!(analysis.notes_checked, 0);
        assert!(analysis.render_diagnostics().is_empty());

        let status = TenseChecker::check_file(
            dir.path().join("plain.yaml"),
            &NoteConfig::default().check_plain_text(true),
            &classifier(),
        )
        .unwrap();
        assert_eq!(
            status,
            NoteStatus::NotPastTense {
                sentence: "Adds a flag.".to_string()
            }
        );
    }

    #[test]
    fn test_blank_note_is_skipped() {
        let dir = TestNoteDirBuilder::new()
            .note(TestNote::structured("blank.yaml", "releasenote", "   "))
            .build()
            .unwrap();

        let status = TenseChecker::check_file(
            dir.path().join("blank.yaml"),
            &NoteConfig::default(),
            &classifier(),
        )
        .unwrap();
        assert_eq!(status, NoteStatus::NoField);
    }

    #[test]
    fn test_nothing_to_check() {
        let dir = TestScenario::NothingToCheck.build().unwrap();

        let analysis = TenseChecker::check_directory(
            dir.path(),
            &NoteConfig::default(),
            &SeverityConfig::default(),
            &classifier(),
        )
        .unwrap();

        assert_eq!(analysis.files_scanned(), 2);
        assert_eq!(analysis.notes_checked, 0);
        assert!(analysis.render_diagnostics().is_empty());
    }

    #[test]
    fn test_malformed_file_skipped_by_default() {
        let dir = TestScenario::MalformedInTheMiddle.build().unwrap();

        let analysis = TenseChecker::check_directory(
            dir.path(),
            &NoteConfig::default(),
            &SeverityConfig::default(),
            &classifier(),
        )
        .unwrap();

        assert_eq!(analysis.total_violations, 2);
        assert_eq!(analysis.total_warnings, 1);
        assert!(matches!(
            analysis.reports[1].status,
            NoteStatus::ParseFailed { .. }
        ));
        assert_eq!(
            analysis.reports[1].issues[0].severity,
            IssueSeverity::Warning
        );
        assert!(analysis.render_summary().contains("1 file(s) could not be parsed"));
    }

    #[test]
    fn test_malformed_file_aborts_when_configured() {
        let dir = TestScenario::MalformedInTheMiddle.build().unwrap();

        let err = TenseChecker::check_directory(
            dir.path(),
            &NoteConfig::default().on_parse_error(ParseErrorPolicy::Abort),
            &SeverityConfig::default(),
            &classifier(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::YamlParseError { .. }));
        assert!(err.to_string().contains("b-broken.yaml"));
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let err = TenseChecker::check_directory(
            temp_dir.path().join("nope"),
            &NoteConfig::default(),
            &SeverityConfig::default(),
            &classifier(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::DirectoryNotFound { .. }));
    }
}

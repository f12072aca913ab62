// pre-defined note directories

use super::note_builder::{TestNote, TestNoteDir, TestNoteDirBuilder};
use crate::utils::release_note::DEFAULT_FIELD_NAME;

/// pre-defined test scenarios
pub enum TestScenario {
    /// a note without a past-tense token, a mixed note, a note with a code span
    ChangelogStyle,
    /// a valid note, a malformed file, and another valid note after it
    MalformedInTheMiddle,
    /// files without a usable note field
    NothingToCheck,
}

impl TestScenario {
    pub fn build(self) -> Result<TestNoteDir, Box<dyn std::error::Error>> {
        match self {
            TestScenario::ChangelogStyle => Self::build_changelog_style(),
            TestScenario::MalformedInTheMiddle => Self::build_malformed_in_the_middle(),
            TestScenario::NothingToCheck => Self::build_nothing_to_check(),
        }
    }

    fn build_changelog_style() -> Result<TestNoteDir, Box<dyn std::error::Error>> {
        TestNoteDirBuilder::new()
            .note(TestNote::structured(
                "add-support.yaml",
                DEFAULT_FIELD_NAME,
                "Added support for X.",
            ))
            .note(TestNote::structured(
                "improve-reliability.yaml",
                DEFAULT_FIELD_NAME,
                "Added support for X. The feature improved reliability.",
            ))
            .note(TestNote::structured(
                "run-command.yml",
                DEFAULT_FIELD_NAME,
                "Uses the `runCommand()` API to invoke builds.",
            ))
            .build()
    }

    fn build_malformed_in_the_middle() -> Result<TestNoteDir, Box<dyn std::error::Error>> {
        TestNoteDirBuilder::new()
            .note(TestNote::structured(
                "a-first.yaml",
                DEFAULT_FIELD_NAME,
                "Adds a flag.",
            ))
            .note(TestNote::raw("b-broken.yaml", "releasenote: [unclosed\n"))
            .note(TestNote::structured(
                "c-last.yaml",
                DEFAULT_FIELD_NAME,
                "Adds another flag.",
            ))
            .build()
    }

    fn build_nothing_to_check() -> Result<TestNoteDir, Box<dyn std::error::Error>> {
        TestNoteDirBuilder::new()
            .note(TestNote::raw("no-field.yaml", "title: Adds a flag\n"))
            .note(TestNote::raw(
                "no-text.yaml",
                "releasenote:\n  body: Adds a flag\n",
            ))
            .note(TestNote::raw("not-yaml.txt", "releasenote: Adds a flag\n"))
            .build()
    }
}

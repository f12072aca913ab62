pub mod error;
pub mod utils;

pub use error::*;
pub use utils::config::{CONFIG_FILE_NAME, TensecheckConfig};
pub use utils::filesystem::*;
pub use utils::nlp::{
    LanguageResources, PERCEPTRON_TAGGER_ENG, PUNKT_TAB, PartOfSpeechTagger, PerceptronTagger,
    ResourceConfig, ResourceSpec, ResourceStore, TenseClassifier, Tokenizer,
};
pub use utils::release_note::{
    NoteConfig, NoteReport, NoteStatus, ParseErrorPolicy, TenseAnalysis, parse_note_from_yaml,
    read_note,
};
pub use utils::severity::{Issue, IssueSeverity, IssueType};
pub use utils::severity_config::SeverityConfig;
pub use utils::tense_checker::TenseChecker;

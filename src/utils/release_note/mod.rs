// release note extraction module

pub mod config;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::{DEFAULT_FIELD_NAME, NoteConfig, ParseErrorPolicy};
pub use parser::{parse_note_from_yaml, read_note};
pub use types::{NoteReport, NoteStatus, ReleaseNoteField, StructuredNote, TenseAnalysis};
pub use validator::{contains_code_span, is_blank};

pub mod config;
pub mod filesystem;
pub mod nlp;
pub mod release_note;
pub mod severity;
pub mod severity_config;
pub mod tense_checker;

pub mod testing;

// testing utilities for building note directories and offline resources

pub mod note_builder;
pub mod resource_cache;
pub mod scenarios;

pub use note_builder::{TestNote, TestNoteDir, TestNoteDirBuilder};
pub use resource_cache::seed_resource_cache;
pub use scenarios::TestScenario;

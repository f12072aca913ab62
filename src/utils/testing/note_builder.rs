// builder for creating release note directories

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// a note file to be created
#[derive(Debug, Clone)]
pub struct TestNote {
    pub file_name: String,
    pub content: String,
}

impl TestNote {
    /// raw file content, written as-is
    pub fn raw(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// `<field>: {text: <text>}`
    pub fn structured(file_name: impl Into<String>, field: &str, text: &str) -> Self {
        let content = format!("{}:\n  text: {}\n", quoted(field), quoted(text));
        Self::raw(file_name, content)
    }

    /// `<field>: <text>`
    pub fn plain(file_name: impl Into<String>, field: &str, text: &str) -> Self {
        let content = format!("{}: {}\n", quoted(field), quoted(text));
        Self::raw(file_name, content)
    }
}

// json string literals are valid yaml double-quoted scalars
fn quoted(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// builder for a directory of note files
pub struct TestNoteDirBuilder {
    notes: Vec<TestNote>,
    config: Option<String>,
}

impl TestNoteDirBuilder {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            config: None,
        }
    }

    pub fn note(mut self, note: TestNote) -> Self {
        self.notes.push(note);
        self
    }

    /// write a `tensecheck.toml` next to the notes
    pub fn config(mut self, toml: impl Into<String>) -> Self {
        self.config = Some(toml.into());
        self
    }

    pub fn build(self) -> Result<TestNoteDir, Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;

        for note in &self.notes {
            fs::write(temp_dir.path().join(&note.file_name), &note.content)?;
        }

        if let Some(config) = &self.config {
            fs::write(temp_dir.path().join(crate::CONFIG_FILE_NAME), config)?;
        }

        Ok(TestNoteDir {
            path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

impl Default for TestNoteDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// a note directory that is removed when dropped
pub struct TestNoteDir {
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TestNoteDir {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::release_note::parse_note_from_yaml;

    #[test]
    fn test_rendered_notes_parse_back() {
        let structured = TestNote::structured("a.yaml", "releasenote", "Fixed: the `x` thing");
        let plain = TestNote::plain("b.yaml", "releasenote", "Added 'quoted' words");

        let parsed = |note: &TestNote| {
            parse_note_from_yaml(&note.content, "releasenote")
                .unwrap()
                .map(|field| field.into_text())
        };

        assert_eq!(parsed(&structured).as_deref(), Some("Fixed: the `x` thing"));
        assert_eq!(parsed(&plain).as_deref(), Some("Added 'quoted' words"));
    }

    #[test]
    fn test_build_writes_files() {
        let dir = TestNoteDirBuilder::new()
            .note(TestNote::raw("x.yaml", "a: 1\n"))
            .config("[notes]\n")
            .build()
            .unwrap();

        assert!(dir.path().join("x.yaml").is_file());
        assert!(dir.path().join("tensecheck.toml").is_file());
    }
}

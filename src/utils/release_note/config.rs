// release note configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_FIELD_NAME: &str = "releasenote";

/// what to do when a yaml file in the scanned directory fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseErrorPolicy {
    /// log the failure, record an issue, keep scanning
    Skip,
    /// stop the scan with an error
    Abort,
}

/// configuration for release note checking
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteConfig {
    /// mapping key holding the note (default: "releasenote")
    pub field_name: String,

    /// file extensions treated as yaml, without the leading dot
    pub extensions: Vec<String>,

    /// part-of-speech tags that count as past tense
    pub past_tense_tags: Vec<String>,

    /// also check notes written as a bare string instead of a `text` mapping
    pub check_plain_text: bool,

    /// skip notes containing an inline `code` span
    pub exempt_code_spans: bool,

    pub on_parse_error: ParseErrorPolicy,
}

impl NoteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }

    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn past_tense_tags(mut self, tags: Vec<String>) -> Self {
        self.past_tense_tags = tags;
        self
    }

    pub fn check_plain_text(mut self, check: bool) -> Self {
        self.check_plain_text = check;
        self
    }

    pub fn exempt_code_spans(mut self, exempt: bool) -> Self {
        self.exempt_code_spans = exempt;
        self
    }

    pub fn on_parse_error(mut self, policy: ParseErrorPolicy) -> Self {
        self.on_parse_error = policy;
        self
    }

    /// check if a file name ends in one of the configured extensions
    ///
    /// matching is done on the raw name, so `notes.YAML` is not picked up
    /// unless "YAML" is listed
    pub fn matches_file_name(&self, file_name: &str) -> bool {
        self.extensions.iter().any(|ext| {
            file_name
                .strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            field_name: DEFAULT_FIELD_NAME.to_string(),
            extensions: vec!["yaml".to_string(), "yml".to_string()],
            past_tense_tags: vec!["VBD".to_string(), "VBN".to_string()],
            check_plain_text: false,
            exempt_code_spans: true,
            on_parse_error: ParseErrorPolicy::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_yaml_extensions() {
        let config = NoteConfig::default();
        assert!(config.matches_file_name("feature.yaml"));
        assert!(config.matches_file_name("fix.yml"));
        assert!(config.matches_file_name(".yaml"));
        assert!(!config.matches_file_name("notes.txt"));
        assert!(!config.matches_file_name("yaml"));
        assert!(!config.matches_file_name("notes.yamlx"));
        assert!(!config.matches_file_name("notes.YAML"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = NoteConfig::new()
            .field_name("changelog")
            .extensions(vec!["note".to_string()])
            .on_parse_error(ParseErrorPolicy::Abort);

        assert_eq!(config.field_name, "changelog");
        assert!(config.matches_file_name("a.note"));
        assert!(!config.matches_file_name("a.yaml"));
        assert_eq!(config.on_parse_error, ParseErrorPolicy::Abort);
    }

    #[test]
    fn test_policy_from_toml() {
        let config: NoteConfig = toml::from_str("on_parse_error = \"abort\"").unwrap();
        assert_eq!(config.on_parse_error, ParseErrorPolicy::Abort);
        assert_eq!(config.field_name, DEFAULT_FIELD_NAME);
        assert!(!config.check_plain_text);
    }

    #[test]
    fn test_plain_text_opt_in() {
        assert!(!NoteConfig::default().check_plain_text);
        assert!(NoteConfig::new().check_plain_text(true).check_plain_text);

        let config: NoteConfig = toml::from_str("check_plain_text = true").unwrap();
        assert!(config.check_plain_text);
    }
}

use super::nlp::ResourceConfig;
use super::release_note::NoteConfig;
use super::severity_config::SeverityConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "tensecheck.toml";

/// main configuration for tensecheck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TensecheckConfig {
    /// what to check and how
    #[serde(default)]
    pub notes: NoteConfig,

    #[serde(default)]
    pub severity: SeverityConfig,

    /// where the language resources live
    #[serde(default)]
    pub resources: ResourceConfig,
}

impl TensecheckConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let config: TensecheckConfig =
            toml::from_str(&contents).map_err(|e| crate::error::Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// find and load configuration file in the notes directory
    ///
    /// returns default config if the file is missing or can't be parsed
    pub fn load_or_default<P: AsRef<Path>>(notes_dir: P) -> Self {
        match Self::find_config_file(&notes_dir) {
            Some(config_path) => Self::load_from_file(&config_path).unwrap_or_else(|e| {
                log::warn!("ignoring configuration: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// looks for `tensecheck.toml` in the notes directory
    pub fn find_config_file<P: AsRef<Path>>(notes_dir: P) -> Option<PathBuf> {
        let config_path = notes_dir.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

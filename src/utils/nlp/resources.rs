// language resource initialization
//
// resources follow the nltk_data layout so an existing nltk install can be
// reused: `<data_dir>/<category>/<name>/...`, downloaded as
// `<base_url>/<category>/<name>.zip`

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/nltk/nltk_data/gh-pages/packages";

/// a downloadable resource and the files that must exist once installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    pub name: &'static str,
    pub category: &'static str,
    pub required_files: &'static [&'static str],
}

/// sentence tokenizer data (abbreviation lists)
pub const PUNKT_TAB: ResourceSpec = ResourceSpec {
    name: "punkt_tab",
    category: "tokenizers",
    required_files: &["english/abbrev_types.txt"],
};

/// english averaged perceptron tagger model
pub const PERCEPTRON_TAGGER_ENG: ResourceSpec = ResourceSpec {
    name: "averaged_perceptron_tagger_eng",
    category: "taggers",
    required_files: &[
        "averaged_perceptron_tagger_eng.weights.json",
        "averaged_perceptron_tagger_eng.tagdict.json",
        "averaged_perceptron_tagger_eng.classes.json",
    ],
};

/// resource settings from the `[resources]` table of the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// data directory, defaults to `~/nltk_data`
    pub data_dir: Option<PathBuf>,

    /// never download, fail if a resource is missing
    pub offline: bool,

    pub base_url: Option<String>,

    /// expected sha256 of the punkt_tab archive
    pub punkt_sha256: Option<String>,

    /// expected sha256 of the tagger archive
    pub tagger_sha256: Option<String>,
}

/// installed resource locations, handed to the tokenizer and tagger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageResources {
    pub punkt_dir: PathBuf,
    pub tagger_dir: PathBuf,
}

/// ensures language resources are present in a data directory
#[derive(Debug, Clone)]
pub struct ResourceStore {
    data_dir: PathBuf,
    base_url: String,
    offline: bool,
    checksums: HashMap<&'static str, String>,
}

impl ResourceStore {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            offline: false,
            checksums: HashMap::new(),
        }
    }

    /// build a store from configuration, falling back to the default data directory
    pub fn from_config(config: &ResourceConfig) -> Result<Self> {
        let data_dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => Self::default_data_dir()?,
        };

        let mut store = Self::new(data_dir).offline(config.offline);
        if let Some(url) = &config.base_url {
            store = store.base_url(url.clone());
        }
        if let Some(sha) = &config.punkt_sha256 {
            store = store.checksum(&PUNKT_TAB, sha.clone());
        }
        if let Some(sha) = &config.tagger_sha256 {
            store = store.checksum(&PERCEPTRON_TAGGER_ENG, sha.clone());
        }
        Ok(store)
    }

    /// `~/nltk_data`, the directory nltk itself downloads into
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join("nltk_data"))
            .ok_or(Error::DataDirUnavailable)
    }

    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn checksum(mut self, spec: &ResourceSpec, sha256: impl Into<String>) -> Self {
        self.checksums.insert(spec.name, sha256.into());
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn resource_dir(&self, spec: &ResourceSpec) -> PathBuf {
        self.data_dir.join(spec.category).join(spec.name)
    }

    pub fn is_present(&self, spec: &ResourceSpec) -> bool {
        let dir = self.resource_dir(spec);
        spec.required_files.iter().all(|file| dir.join(file).is_file())
    }

    /// make sure a resource is installed, downloading it if needed
    pub fn ensure(&self, spec: &ResourceSpec) -> Result<PathBuf> {
        let dir = self.resource_dir(spec);

        if self.is_present(spec) {
            log::debug!("resource {} found in {}", spec.name, dir.display());
            return Ok(dir);
        }

        if self.offline {
            return Err(Error::ResourceMissing {
                name: spec.name.to_string(),
                path: self.data_dir.clone(),
            });
        }

        let archive = self.download(spec)?;
        self.install_archive(spec, &archive)
    }

    /// make sure every resource the checker needs is installed
    pub fn ensure_all(&self) -> Result<LanguageResources> {
        Ok(LanguageResources {
            punkt_dir: self.ensure(&PUNKT_TAB)?,
            tagger_dir: self.ensure(&PERCEPTRON_TAGGER_ENG)?,
        })
    }

    pub fn archive_url(&self, spec: &ResourceSpec) -> String {
        format!("{}/{}/{}.zip", self.base_url, spec.category, spec.name)
    }

    fn download(&self, spec: &ResourceSpec) -> Result<Vec<u8>> {
        let url = self.archive_url(spec);
        log::info!("downloading {} from {}", spec.name, url);

        let bytes = reqwest::blocking::get(&url)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map_err(|source| Error::DownloadError {
                url: url.clone(),
                source,
            })?;

        log::debug!("downloaded {} bytes for {}", bytes.len(), spec.name);
        Ok(bytes.to_vec())
    }

    /// verify and unpack a resource archive into the data directory
    ///
    /// the archive is unpacked into a staging directory first so a failed
    /// extraction never leaves a half-written resource behind
    pub fn install_archive(&self, spec: &ResourceSpec, archive: &[u8]) -> Result<PathBuf> {
        if let Some(expected) = self.checksums.get(spec.name) {
            verify_checksum(spec, archive, expected)?;
        }

        let category_dir = self.data_dir.join(spec.category);
        fs::create_dir_all(&category_dir)?;

        let staging = tempfile::TempDir::new_in(&category_dir)?;
        let mut zip = zip::ZipArchive::new(Cursor::new(archive)).map_err(|source| {
            Error::ArchiveError {
                name: spec.name.to_string(),
                source,
            }
        })?;
        zip.extract(staging.path())
            .map_err(|source| Error::ArchiveError {
                name: spec.name.to_string(),
                source,
            })?;

        let extracted = staging.path().join(spec.name);
        if !extracted.is_dir() {
            return Err(Error::InvalidResource {
                path: extracted,
                reason: format!("archive does not contain a '{}' directory", spec.name),
            });
        }

        let target = self.resource_dir(spec);
        if target.exists() {
            fs::remove_dir_all(&target)?;
        }
        fs::rename(&extracted, &target)?;

        if !self.is_present(spec) {
            return Err(Error::InvalidResource {
                path: target,
                reason: format!("expected files {:?}", spec.required_files),
            });
        }

        log::info!("installed {} into {}", spec.name, target.display());
        Ok(target)
    }
}

fn verify_checksum(spec: &ResourceSpec, archive: &[u8], expected: &str) -> Result<()> {
    let actual = hex::encode(Sha256::digest(archive));
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(Error::ChecksumMismatch {
            name: spec.name.to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn build_archive(files: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, content) in files {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    fn punkt_archive() -> Vec<u8> {
        build_archive(&[("punkt_tab/english/abbrev_types.txt", "e.g\netc\n")])
    }

    #[test]
    fn test_resource_dir_layout() {
        let store = ResourceStore::new("/data");
        assert_eq!(
            store.resource_dir(&PUNKT_TAB),
            PathBuf::from("/data/tokenizers/punkt_tab")
        );
        assert_eq!(
            store.archive_url(&PERCEPTRON_TAGGER_ENG),
            format!("{}/taggers/averaged_perceptron_tagger_eng.zip", DEFAULT_BASE_URL)
        );
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let store = ResourceStore::new("/data").base_url("http://mirror.local/packages/");
        assert_eq!(
            store.archive_url(&PUNKT_TAB),
            "http://mirror.local/packages/tokenizers/punkt_tab.zip"
        );
    }

    #[test]
    fn test_offline_missing_resource() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path()).offline(true);

        assert!(!store.is_present(&PUNKT_TAB));
        let err = store.ensure(&PUNKT_TAB).unwrap_err();
        assert!(matches!(err, Error::ResourceMissing { .. }));
    }

    #[test]
    fn test_install_archive() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path()).offline(true);

        let dir = store.install_archive(&PUNKT_TAB, &punkt_archive()).unwrap();
        assert_eq!(dir, store.resource_dir(&PUNKT_TAB));
        assert!(store.is_present(&PUNKT_TAB));

        // present now, so offline ensure succeeds
        assert_eq!(store.ensure(&PUNKT_TAB).unwrap(), dir);
    }

    #[test]
    fn test_install_archive_replaces_partial_resource() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path());
        let stale = store.resource_dir(&PUNKT_TAB).join("stale.txt");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "old").unwrap();

        store.install_archive(&PUNKT_TAB, &punkt_archive()).unwrap();
        assert!(!stale.exists());
        assert!(store.is_present(&PUNKT_TAB));
    }

    #[test]
    fn test_install_archive_checksum() {
        let temp_dir = TempDir::new().unwrap();
        let archive = punkt_archive();
        let good = hex::encode(Sha256::digest(&archive));

        let store = ResourceStore::new(temp_dir.path()).checksum(&PUNKT_TAB, "00ff");
        let err = store.install_archive(&PUNKT_TAB, &archive).unwrap_err();
        assert!(matches!(err, Error::ChecksumMismatch { .. }));
        assert!(!store.is_present(&PUNKT_TAB));

        let store = ResourceStore::new(temp_dir.path()).checksum(&PUNKT_TAB, good.to_uppercase());
        assert!(store.install_archive(&PUNKT_TAB, &archive).is_ok());
    }

    #[test]
    fn test_install_archive_wrong_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path());
        let archive = build_archive(&[("something_else/file.txt", "x")]);

        let err = store.install_archive(&PUNKT_TAB, &archive).unwrap_err();
        assert!(matches!(err, Error::InvalidResource { .. }));
    }

    #[test]
    fn test_install_archive_not_a_zip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ResourceStore::new(temp_dir.path());

        let err = store.install_archive(&PUNKT_TAB, b"plain bytes").unwrap_err();
        assert!(matches!(err, Error::ArchiveError { .. }));
    }

    #[test]
    fn test_from_config() {
        let config = ResourceConfig {
            data_dir: Some(PathBuf::from("/srv/nltk")),
            offline: true,
            ..Default::default()
        };
        let store = ResourceStore::from_config(&config).unwrap();
        assert_eq!(store.data_dir(), Path::new("/srv/nltk"));
        assert!(store.offline);
    }
}

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    DirectoryNotFound {
        path: PathBuf,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    ModelParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    ResourceMissing {
        name: String,
        path: PathBuf,
    },
    InvalidResource {
        path: PathBuf,
        reason: String,
    },
    DownloadError {
        url: String,
        source: reqwest::Error,
    },
    ArchiveError {
        name: String,
        source: zip::result::ZipError,
    },
    ChecksumMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    DataDirUnavailable,
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DirectoryNotFound { path } => {
                write!(f, "directory not found: {}", path.display())
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::YamlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse yaml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::ModelParseError { path, source } => {
                write!(
                    f,
                    "failed to parse model file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::ResourceMissing { name, path } => {
                write!(
                    f,
                    "resource '{}' not found in {} and downloads are disabled",
                    name,
                    path.display()
                )
            }
            Error::InvalidResource { path, reason } => {
                write!(f, "invalid resource at {}: {}", path.display(), reason)
            }
            Error::DownloadError { url, source } => {
                write!(f, "failed to download {}: {}", url, source)
            }
            Error::ArchiveError { name, source } => {
                write!(f, "failed to extract resource '{}': {}", name, source)
            }
            Error::ChecksumMismatch {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "checksum mismatch for resource '{}': expected {}, got {}",
                    name, expected, actual
                )
            }
            Error::DataDirUnavailable => {
                write!(f, "could not determine a data directory for language resources")
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::YamlParseError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::ModelParseError { source, .. } => Some(source),
            Error::DownloadError { source, .. } => Some(source),
            Error::ArchiveError { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

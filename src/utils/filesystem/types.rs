use std::path::PathBuf;

/// a regular file found directly inside the scanned directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FsFile {
    /// file name as listed by the directory, used in diagnostics
    pub name: String,
    pub path: PathBuf,
}

impl FsFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        FsFile { name, path }
    }
}

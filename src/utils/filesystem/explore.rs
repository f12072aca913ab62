use crate::error::{Error, Result};
use crate::utils::filesystem::types::FsFile;
use std::fs;
use std::path::PathBuf;

/// lists the files of a single directory, without descending into subdirectories
pub struct FilesystemExplorer {
    pub root_path: PathBuf,
}

impl FilesystemExplorer {
    pub fn new<P: Into<PathBuf>>(root_path: P) -> Self {
        FilesystemExplorer {
            root_path: root_path.into(),
        }
    }

    /// regular files directly inside the root, sorted by name
    pub fn list_files(&self) -> Result<Vec<FsFile>> {
        if !self.root_path.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: self.root_path.clone(),
            });
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root_path)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(FsFile::new(path));
            }
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    /// files whose name satisfies the predicate, sorted by name
    pub fn list_files_matching<F>(&self, predicate: F) -> Result<Vec<FsFile>>
    where
        F: Fn(&str) -> bool,
    {
        let files = self.list_files()?;
        Ok(files.into_iter().filter(|f| predicate(&f.name)).collect())
    }
}

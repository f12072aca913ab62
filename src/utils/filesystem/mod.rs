pub mod explore;
pub mod types;

pub use explore::FilesystemExplorer;
pub use types::FsFile;

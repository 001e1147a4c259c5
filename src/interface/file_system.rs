use crate::model::entry::{DirectoryEntry, FileEntry};
use crate::model::error::Error;
use crate::model::relative_path::RelativePath;
use async_trait::async_trait;
use std::path::PathBuf;

/// Read-only view of the tree that holds the projects.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn exists(&self, path: &RelativePath) -> Result<bool, Error>;

    /// Immediate children of a directory, in the order the backend lists them.
    async fn list_children(&self, path: &RelativePath) -> Result<Vec<DirectoryEntry>, Error>;

    /// Immediate children with their MIME type; directories have none.
    async fn list_with_mime_type(&self, path: &RelativePath) -> Result<Vec<FileEntry>, Error>;

    async fn read_all(&self, path: &RelativePath) -> Result<Vec<u8>, Error>;

    fn absolute_path(&self, path: &RelativePath) -> PathBuf;
}

/// Archive destination.
#[async_trait]
pub trait RemoteStorage: Send + Sync {
    async fn exists(&self, path: &RelativePath) -> Result<bool, Error>;

    /// Create or overwrite `path`, creating missing parent directories.
    async fn write_all(&self, path: &RelativePath, contents: Vec<u8>) -> Result<(), Error>;
}

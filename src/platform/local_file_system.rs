use crate::interface::file_system::LocalStorage;
use crate::model::entry::{DirectoryEntry, EntryKind, FileEntry};
use crate::model::error::io::IOError;
use crate::model::error::Error;
use crate::model::log::io::IOLog;
use crate::model::relative_path::RelativePath;
use crate::utils::mime;
use async_trait::async_trait;
use macros::log;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncReadExt;
use tokio_stream::wrappers::ReadDirStream;
use tokio_stream::StreamExt;

/// The project tree on the local disk. Never written to.
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn mime_type(&self, path: &Path) -> Result<&'static str, Error> {
        let mut file = fs::File::open(path)
            .await
            .map_err(|err| IOError::read_file_failed(path, err))?;

        let mut head = [0u8; mime::SNIFF_LENGTH];
        let mut filled = 0;
        while filled < head.len() {
            let read = file
                .read(&mut head[filled..])
                .await
                .map_err(|err| IOError::read_file_failed(path, err))?;
            if read == 0 {
                break;
            }
            filled += read;
        }

        Ok(mime::sniff(&head[..filled]))
    }
}

#[async_trait]
impl LocalStorage for LocalFileSystem {
    async fn exists(&self, path: &RelativePath) -> Result<bool, Error> {
        let full_path = path.under(&self.root);
        fs::try_exists(&full_path)
            .await
            .map_err(|err| IOError::get_metadata_failed(full_path, err).into())
    }

    // Symbolic links are reported as files so the walk never follows them.
    async fn list_children(&self, path: &RelativePath) -> Result<Vec<DirectoryEntry>, Error> {
        let full_path = path.under(&self.root);
        let reader = fs::read_dir(&full_path)
            .await
            .map_err(|err| IOError::read_directory_failed(&full_path, err))?;

        let mut result = Vec::new();
        let mut entries = ReadDirStream::new(reader);
        while let Some(entry) = entries.next().await {
            let entry = entry.map_err(|err| IOError::read_directory_failed(&full_path, err))?;
            let file_type = entry
                .file_type()
                .await
                .map_err(|err| IOError::get_metadata_failed(entry.path(), err))?;

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                log!(IOLog::NonUtf8EntrySkipped { path: entry.path() });
                continue;
            };

            result.push(DirectoryEntry {
                path: path.join(&name),
                kind: if file_type.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                },
            });
        }
        Ok(result)
    }

    async fn list_with_mime_type(&self, path: &RelativePath) -> Result<Vec<FileEntry>, Error> {
        let mut result = Vec::new();
        for entry in self.list_children(path).await? {
            let mime_type = match entry.kind {
                EntryKind::Directory => None,
                EntryKind::File => {
                    let full_path = entry.path.under(&self.root);
                    Some(self.mime_type(&full_path).await?.to_string())
                }
            };
            result.push(FileEntry {
                path: entry.path,
                mime_type,
            });
        }
        Ok(result)
    }

    async fn read_all(&self, path: &RelativePath) -> Result<Vec<u8>, Error> {
        let full_path = path.under(&self.root);
        fs::read(&full_path)
            .await
            .map_err(|err| IOError::read_file_failed(full_path, err).into())
    }

    fn absolute_path(&self, path: &RelativePath) -> PathBuf {
        path.under(&self.root)
    }
}

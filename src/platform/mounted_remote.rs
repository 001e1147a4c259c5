use crate::interface::file_system::RemoteStorage;
use crate::model::error::io::IOError;
use crate::model::error::Error;
use crate::model::log::io::IOLog;
use crate::model::relative_path::RelativePath;
use async_trait::async_trait;
use macros::log;
use std::path::PathBuf;
use tokio::fs;

/// Remote store reachable as a directory, such as an SSHFS or NFS mount.
pub struct MountedRemote {
    root: PathBuf,
}

impl MountedRemote {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl RemoteStorage for MountedRemote {
    async fn exists(&self, path: &RelativePath) -> Result<bool, Error> {
        let full_path = path.under(&self.root);
        fs::try_exists(&full_path)
            .await
            .map_err(|err| IOError::get_metadata_failed(full_path, err).into())
    }

    async fn write_all(&self, path: &RelativePath, contents: Vec<u8>) -> Result<(), Error> {
        let full_path = path.under(&self.root);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| IOError::create_directory_failed(parent, err))?;
        }

        let bytes = contents.len();
        fs::write(&full_path, contents)
            .await
            .map_err(|err| IOError::write_file_failed(&full_path, err))?;

        log!(IOLog::FileWritten {
            path: full_path,
            bytes
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn write_creates_parents_and_overwrites() {
        let root = tempdir().unwrap();
        let remote = MountedRemote::new(root.path());
        let destination = RelativePath::parse("maths/ch1/notes.pdf").unwrap();

        assert!(!remote.exists(&destination).await.unwrap());

        remote.write_all(&destination, b"first".to_vec()).await.unwrap();
        assert!(remote.exists(&destination).await.unwrap());

        remote.write_all(&destination, b"second".to_vec()).await.unwrap();
        assert_eq!(
            std_fs::read(root.path().join("maths/ch1/notes.pdf")).unwrap(),
            b"second"
        );
    }

    #[tokio::test]
    async fn write_fails_when_a_parent_is_a_file() {
        let root = tempdir().unwrap();
        std_fs::write(root.path().join("maths"), b"").unwrap();
        let remote = MountedRemote::new(root.path());

        let result = remote
            .write_all(&RelativePath::parse("maths/notes.pdf").unwrap(), b"x".to_vec())
            .await;

        assert!(matches!(
            result,
            Err(Error::IO(IOError::CreateDirectoryFailed { .. }))
        ));
    }
}

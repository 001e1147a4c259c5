use crate::interface::file_system::{LocalStorage, RemoteStorage};
use crate::model::error::system::SystemError;
use std::sync::Arc;

/// Holds the two storage capabilities until an archiver is built from them.
#[derive(Default)]
pub struct IOManager {
    local: Option<Arc<dyn LocalStorage>>,
    remote: Option<Arc<dyn RemoteStorage>>,
}

impl IOManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_local_storage(&mut self, local: Arc<dyn LocalStorage>) {
        self.local = Some(local);
    }

    pub fn set_remote_storage(&mut self, remote: Arc<dyn RemoteStorage>) {
        self.remote = Some(remote);
    }

    pub fn storages(&self) -> Result<(Arc<dyn LocalStorage>, Arc<dyn RemoteStorage>), SystemError> {
        match (&self.local, &self.remote) {
            (Some(local), Some(remote)) => Ok((local.clone(), remote.clone())),
            _ => Err(SystemError::StorageNotConfigured),
        }
    }
}

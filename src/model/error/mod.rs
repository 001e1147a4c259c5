pub mod io;
pub mod system;

use crate::model::error::io::IOError;
use crate::model::error::system::SystemError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(IOError),
    #[error(transparent)]
    System(SystemError),
}

impl Error {
    pub fn level(&self) -> tracing::Level {
        match self {
            Self::IO(error) => error.level(),
            Self::System(error) => error.level(),
        }
    }
}

impl From<IOError> for Error {
    fn from(error: IOError) -> Self {
        Self::IO(error)
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}

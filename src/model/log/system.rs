use macros::loggable;
use std::path::PathBuf;

loggable! {
    SystemLog {
        #[error("pdf-archiver {version} starting")]
        Starting { version: String } => tracing::Level::INFO,

        #[error("Configuration loaded from {path}")]
        ConfigLoaded { path: PathBuf } => tracing::Level::INFO,

        #[error("No configuration file, using defaults")]
        ConfigDefaulted => tracing::Level::INFO,

        #[error("Local storage rooted at {path}")]
        LocalStorageReady { path: PathBuf } => tracing::Level::DEBUG,

        #[error("Remote storage rooted at {path}")]
        RemoteStorageReady { path: PathBuf } => tracing::Level::DEBUG,

        #[error("Finished")]
        Finished => tracing::Level::INFO,
    }
}

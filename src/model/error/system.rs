use macros::traceable;
use std::path::PathBuf;

traceable! {
    SystemError {
        #[no_source]
        #[error("You need to set your local and remote storage")]
        StorageNotConfigured => tracing::Level::ERROR,

        #[error("Configuration not found at {path}: {err}")]
        ConfigNotFound { path: PathBuf } => tracing::Level::ERROR,

        #[error("Invalid configuration in {path}: {err}")]
        InvalidConfig { path: PathBuf } => tracing::Level::ERROR,

        #[no_source]
        #[error("Build command must not be empty")]
        EmptyBuildCommand => tracing::Level::ERROR,

        #[no_source]
        #[error("Invalid start path {path}: must be relative and must not contain '..'")]
        InvalidStartPath { path: String } => tracing::Level::ERROR,

        #[error("Failed to initialize logging in {path}: {err}")]
        LoggingInitFailed { path: PathBuf } => tracing::Level::ERROR,
    }
}

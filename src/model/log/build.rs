use macros::loggable;
use std::path::PathBuf;

loggable! {
    BuildLog {
        #[error("Running {command} in {path}")]
        Started { command: String, path: PathBuf } => tracing::Level::INFO,

        #[error("Build succeeded in {path}")]
        Succeeded { path: PathBuf } => tracing::Level::DEBUG,

        #[error("Build in {path} exited with {status}")]
        Failed { path: PathBuf, status: String } => tracing::Level::WARN,

        #[error("Unable to start {command} in {path}: {reason}")]
        SpawnFailed { command: String, path: PathBuf, reason: String } => tracing::Level::WARN,
    }
}

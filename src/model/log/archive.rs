use macros::loggable;

loggable! {
    ArchiveLog {
        #[error("Archiving from {path}")]
        WalkStarted { path: String } => tracing::Level::INFO,

        #[error("Visited {visited} directories, {qualified} projects, uploaded {uploaded}, skipped {skipped}")]
        WalkCompleted { visited: usize, qualified: usize, uploaded: usize, skipped: usize } => tracing::Level::INFO,

        #[error("Entering directory {path}")]
        EnteringDirectory { path: String } => tracing::Level::INFO,

        #[error("No PDF files in {path}")]
        NoPdfFiles { path: String } => tracing::Level::DEBUG,

        #[error("Uploading {from} to {to}")]
        Uploading { from: String, to: String } => tracing::Level::INFO,

        #[error("Replacing {to} with {from}")]
        Replacing { from: String, to: String } => tracing::Level::INFO,

        #[error("Kept existing {path}")]
        ReplaceDeclined { path: String } => tracing::Level::INFO,
    }
}

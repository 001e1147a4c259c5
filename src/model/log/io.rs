use macros::loggable;
use std::path::PathBuf;

loggable! {
    IOLog {
        #[error("Skipping entry with a non UTF-8 name: {path}")]
        NonUtf8EntrySkipped { path: PathBuf } => tracing::Level::WARN,

        #[error("Wrote {bytes} bytes to {path}")]
        FileWritten { path: PathBuf, bytes: usize } => tracing::Level::DEBUG,
    }
}

use async_trait::async_trait;
use std::path::Path;

/// Runs the build step of a project directory.
///
/// The call blocks until the build finishes. Its outcome is not reported
/// back: a failing build never stops the upload that follows it.
#[async_trait]
pub trait BuildRunner: Send + Sync {
    async fn run(&self, working_directory: &Path);
}

use crate::model::relative_path::RelativePath;

/// Rendering and confirmation hooks of the invoking shell.
pub trait Console: Send + Sync {
    /// A qualifying directory is about to be processed.
    fn entering_directory(&self, path: &RelativePath);

    /// Called right before `filename` is written to the remote.
    fn uploading(&self, filename: &str);

    /// Asked once per file whose destination already exists, unless
    /// overwriting is forced. `false` keeps the remote file.
    fn confirm_replace(&self, filename: &str) -> bool;
}

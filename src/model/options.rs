/// Per-run policy supplied by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveOptions {
    /// Run the build in every qualifying directory before uploading.
    pub trigger_build: bool,
    /// Replace existing remote files without asking.
    pub force_overwrite: bool,
    /// Upload only the last PDF (by path order) of each output folder.
    pub only_last_file: bool,
}

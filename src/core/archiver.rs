use crate::core::io_manager::IOManager;
use crate::interface::build_runner::BuildRunner;
use crate::interface::console::Console;
use crate::interface::file_system::{LocalStorage, RemoteStorage};
use crate::model::entry::FileEntry;
use crate::model::error::Error;
use crate::model::log::archive::ArchiveLog;
use crate::model::options::ArchiveOptions;
use crate::model::relative_path::RelativePath;
use crate::model::transfer::{TransferAction, TransferDecision};
use macros::log;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

pub const BUILD_FILE: &str = "makefile";
pub const OUTPUT_FOLDER: &str = "pdf";

type WalkFuture<'a> = Pin<Box<dyn Future<Output = Result<(), Error>> + Send + 'a>>;

#[derive(Debug, Default)]
struct WalkStats {
    visited: usize,
    qualified: usize,
    uploaded: usize,
    skipped: usize,
}

/// Walks the local tree, builds qualifying projects and uploads their PDFs.
///
/// Everything runs sequentially and the first storage error aborts the walk.
/// Files uploaded before the failure stay on the remote.
pub struct Archiver {
    local: Arc<dyn LocalStorage>,
    remote: Arc<dyn RemoteStorage>,
    build_runner: Arc<dyn BuildRunner>,
    console: Arc<dyn Console>,
    options: ArchiveOptions,
}

impl Archiver {
    pub fn new(
        io_manager: &IOManager,
        build_runner: Arc<dyn BuildRunner>,
        console: Arc<dyn Console>,
        options: ArchiveOptions,
    ) -> Result<Self, Error> {
        let (local, remote) = io_manager.storages()?;
        Ok(Self {
            local,
            remote,
            build_runner,
            console,
            options,
        })
    }

    pub async fn archive(&self, start: &RelativePath) -> Result<(), Error> {
        let span = tracing::info_span!("archive", run = %Uuid::new_v4());
        self.walk(start).instrument(span).await
    }

    async fn walk(&self, start: &RelativePath) -> Result<(), Error> {
        log!(ArchiveLog::WalkStarted {
            path: start.to_string()
        });

        let mut stats = WalkStats::default();
        self.process_directory(start, &mut stats).await?;

        log!(ArchiveLog::WalkCompleted {
            visited: stats.visited,
            qualified: stats.qualified,
            uploaded: stats.uploaded,
            skipped: stats.skipped,
        });
        Ok(())
    }

    // Pre-order: the directory's own work happens before its children, which
    // are visited in listing order.
    fn process_directory<'a>(
        &'a self,
        path: &'a RelativePath,
        stats: &'a mut WalkStats,
    ) -> WalkFuture<'a> {
        Box::pin(async move {
            stats.visited += 1;

            if self.qualifies(path).await? {
                stats.qualified += 1;
                log!(ArchiveLog::EnteringDirectory {
                    path: path.to_string()
                });
                self.console.entering_directory(path);

                if self.options.trigger_build {
                    self.build_runner
                        .run(&self.local.absolute_path(path))
                        .await;
                }

                self.process_output_folder(&path.join(OUTPUT_FOLDER), stats)
                    .await?;
            }

            let children = self.local.list_children(path).await?;
            for child in children.into_iter().filter(|entry| entry.is_dir()) {
                self.process_directory(&child.path, stats).await?;
            }

            Ok(())
        })
    }

    /// A directory qualifies when it holds `makefile` and a `pdf` directory.
    /// Names are compared against the listing, so case variants never match
    /// even on a case-insensitive filesystem.
    pub async fn qualifies(&self, path: &RelativePath) -> Result<bool, Error> {
        let children = self.local.list_children(path).await?;
        let has_build_file = children
            .iter()
            .any(|child| child.path.file_name() == BUILD_FILE);
        let has_output_folder = children
            .iter()
            .any(|child| child.is_dir() && child.path.file_name() == OUTPUT_FOLDER);
        Ok(has_build_file && has_output_folder)
    }

    /// PDF files of an output folder in path order, reduced to the last one
    /// when only the last file is wanted.
    pub async fn select_files(&self, folder: &RelativePath) -> Result<Vec<FileEntry>, Error> {
        let mut files: Vec<FileEntry> = self
            .local
            .list_with_mime_type(folder)
            .await?
            .into_iter()
            .filter(|entry| entry.is_pdf())
            .collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));

        if self.options.only_last_file {
            Ok(files.pop().into_iter().collect())
        } else {
            Ok(files)
        }
    }

    /// The confirmation hook runs only when the destination exists and
    /// overwriting is not forced.
    pub async fn decide(&self, file: FileEntry) -> Result<TransferDecision, Error> {
        let destination = normalize_remote_path(&file.path);
        let destination_exists = self.remote.exists(&destination).await?;

        let action = if !destination_exists {
            TransferAction::Transfer
        } else if self.options.force_overwrite || self.console.confirm_replace(file.file_name()) {
            TransferAction::Overwrite
        } else {
            TransferAction::Skip
        };

        Ok(TransferDecision {
            file,
            destination,
            destination_exists,
            action,
        })
    }

    async fn process_output_folder(
        &self,
        folder: &RelativePath,
        stats: &mut WalkStats,
    ) -> Result<(), Error> {
        let files = self.select_files(folder).await?;
        if files.is_empty() {
            log!(ArchiveLog::NoPdfFiles {
                path: folder.to_string()
            });
        }

        for file in files {
            let decision = self.decide(file).await?;
            self.apply(&decision, stats).await?;
        }
        Ok(())
    }

    async fn apply(&self, decision: &TransferDecision, stats: &mut WalkStats) -> Result<(), Error> {
        if !decision.writes() {
            log!(ArchiveLog::ReplaceDeclined {
                path: decision.destination.to_string()
            });
            stats.skipped += 1;
            return Ok(());
        }

        self.console.uploading(decision.file.file_name());
        log!(decision.upload_log());

        let contents = self.local.read_all(&decision.file.path).await?;
        self.remote.write_all(&decision.destination, contents).await?;
        stats.uploaded += 1;
        Ok(())
    }
}

/// Remote path of a file found in an output folder.
///
/// Every `pdf` substring is removed from the directory portion, which is then
/// glued to the file name as is: `projectA/pdf/report.pdf` becomes
/// `projectA/report.pdf`. The removal is not segment aware, so
/// `pdfnotes/pdf/report.pdf` becomes `notes/report.pdf` as well.
///
/// The result is collapsed again, so emptied segments disappear and the
/// destination always stays under the remote root.
pub fn normalize_remote_path(path: &RelativePath) -> RelativePath {
    let (directory, file_name) = path.split_parent();
    let directory = directory.replace(OUTPUT_FOLDER, "");
    RelativePath::collapse(&format!("{directory}{file_name}"))
}

use crate::model::entry::FileEntry;
use crate::model::log::archive::ArchiveLog;
use crate::model::relative_path::RelativePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferAction {
    // Destination is free
    Transfer,
    // Destination exists and replacing it was forced or confirmed
    Overwrite,
    Skip,
}

/// What to do with one PDF file. Computed fresh for every file on every run.
#[derive(Debug, Clone)]
pub struct TransferDecision {
    pub file: FileEntry,
    pub destination: RelativePath,
    pub destination_exists: bool,
    pub action: TransferAction,
}

impl TransferDecision {
    pub fn writes(&self) -> bool {
        self.action != TransferAction::Skip
    }

    /// Log line for a write, telling a replacement apart from a new file.
    pub fn upload_log(&self) -> ArchiveLog {
        let from = self.file.path.to_string();
        let to = self.destination.to_string();
        if self.destination_exists {
            ArchiveLog::Replacing { from, to }
        } else {
            ArchiveLog::Uploading { from, to }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::PDF_MIME_TYPE;

    fn decision(destination_exists: bool, action: TransferAction) -> TransferDecision {
        TransferDecision {
            file: FileEntry {
                path: RelativePath::parse("a/pdf/r.pdf").unwrap(),
                mime_type: Some(PDF_MIME_TYPE.to_string()),
            },
            destination: RelativePath::parse("a/r.pdf").unwrap(),
            destination_exists,
            action,
        }
    }

    #[test]
    fn upload_log_reports_replacements() {
        let fresh = decision(false, TransferAction::Transfer);
        assert!(fresh.writes());
        assert_eq!(fresh.upload_log().to_string(), "Uploading a/pdf/r.pdf to a/r.pdf");

        let replaced = decision(true, TransferAction::Overwrite);
        assert!(matches!(replaced.upload_log(), ArchiveLog::Replacing { .. }));
        assert_eq!(replaced.upload_log().to_string(), "Replacing a/r.pdf with a/pdf/r.pdf");

        assert!(!decision(true, TransferAction::Skip).writes());
    }
}

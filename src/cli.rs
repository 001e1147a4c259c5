use crate::model::options::ArchiveOptions;
use clap::Parser;
use std::path::PathBuf;

/// Archive PDF files
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pdf-archiver", author, version, about, long_about = None)]
pub struct Args {
    /// The path to start from, relative to the local root.
    pub path: Option<String>,

    /// If set, we will call the makefile when we find one.
    #[arg(long)]
    pub make: bool,

    /// If set, replace existing PDF files on the remote.
    #[arg(long)]
    pub force: bool,

    /// If set, only try to upload the last generated PDF file in each directory.
    #[arg(long)]
    pub last: bool,

    /// Configuration file. Defaults to ./config.toml when present.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Local tree to walk, overrides `local_root` from the configuration.
    #[arg(long)]
    pub local: Option<PathBuf>,

    /// Mounted remote directory, overrides `remote_root` from the configuration.
    #[arg(long)]
    pub remote: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> ArchiveOptions {
        ArchiveOptions {
            trigger_build: self.make,
            force_overwrite: self.force,
            only_last_file: self.last,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_options() {
        let args = Args::try_parse_from(["pdf-archiver", "courses", "--make", "--last"]).unwrap();

        assert_eq!(args.path.as_deref(), Some("courses"));
        assert_eq!(
            args.options(),
            ArchiveOptions {
                trigger_build: true,
                force_overwrite: false,
                only_last_file: true,
            }
        );
    }

    #[test]
    fn path_is_optional() {
        let args = Args::try_parse_from(["pdf-archiver", "--force"]).unwrap();
        assert_eq!(args.path, None);
        assert!(args.options().force_overwrite);
    }
}

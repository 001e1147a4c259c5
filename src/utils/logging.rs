use crate::model::error::system::SystemError;
use crate::model::error::Error;
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_PREFIX: &str = "pdf-archiver";

pub struct Logging;

impl Logging {
    /// Daily rolling file in `log_directory` plus warnings on stderr. The
    /// returned guard flushes the file writer when dropped.
    pub fn initialize(log_directory: &Path) -> Result<WorkerGuard, Error> {
        fs::create_dir_all(log_directory)
            .map_err(|err| SystemError::logging_init_failed(log_directory, err))?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_FILE_PREFIX)
            .filename_suffix("log")
            .build(log_directory)
            .map_err(|err| SystemError::logging_init_failed(log_directory, err))?;
        let (file_writer, guard) = tracing_appender::non_blocking(appender);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(file_writer).with_ansi(false))
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_filter(LevelFilter::WARN),
            )
            .try_init()
            .map_err(|err| SystemError::logging_init_failed(log_directory, err))?;

        log_panics::init();

        Ok(guard)
    }
}

use crate::interface::build_runner::BuildRunner;
use crate::model::log::build::BuildLog;
use async_trait::async_trait;
use macros::log;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Runs the configured build command (`make` by default) in a project directory.
///
/// Build output goes to the terminal's stderr, stdout is discarded. A failure
/// is logged and otherwise ignored.
pub struct MakeRunner {
    command: String,
    args: Vec<String>,
}

impl MakeRunner {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }
}

#[async_trait]
impl BuildRunner for MakeRunner {
    async fn run(&self, working_directory: &Path) {
        log!(BuildLog::Started {
            command: self.command.clone(),
            path: working_directory.to_path_buf(),
        });

        let status = Command::new(&self.command)
            .args(&self.args)
            .current_dir(working_directory)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .await;

        match status {
            Ok(status) if status.success() => log!(BuildLog::Succeeded {
                path: working_directory.to_path_buf()
            }),
            Ok(status) => log!(BuildLog::Failed {
                path: working_directory.to_path_buf(),
                status: status.to_string(),
            }),
            Err(err) => log!(BuildLog::SpawnFailed {
                command: self.command.clone(),
                path: working_directory.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }
}

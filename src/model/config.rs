use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct ConfigTable {
    #[serde(rename = "Config")]
    pub config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub local_root: Option<PathBuf>,
    #[serde(default)]
    pub remote_root: Option<PathBuf>,
    #[serde(default = "default_build_command")]
    pub build_command: String,
    #[serde(default)]
    pub build_args: Vec<String>,
    #[serde(default = "default_log_directory")]
    pub log_directory: PathBuf,
}

fn default_build_command() -> String {
    "make".to_string()
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("./logs")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            local_root: None,
            remote_root: None,
            build_command: default_build_command(),
            build_args: Vec::new(),
            log_directory: default_log_directory(),
        }
    }
}

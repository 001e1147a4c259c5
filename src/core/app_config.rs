use crate::model::config::{Config, ConfigTable};
use crate::model::error::system::SystemError;
use crate::model::error::Error;
use std::fs;
use std::ops::Deref;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

pub struct AppConfig {
    config: Config,
    source: Option<PathBuf>,
}

impl AppConfig {
    /// Load an explicitly requested file, or `./config.toml` when it exists.
    /// Without either the defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Error> {
        match explicit {
            Some(path) => Self::load_config_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load_config_file(path)
                } else {
                    Ok(Self {
                        config: Config::default(),
                        source: None,
                    })
                }
            }
        }
    }

    fn load_config_file(path: &Path) -> Result<Self, Error> {
        let toml_string =
            fs::read_to_string(path).map_err(|err| SystemError::config_not_found(path, err))?;
        let config = Self::parse(&toml_string, path)?;
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    fn parse(toml_string: &str, path: &Path) -> Result<Config, Error> {
        let config = toml::from_str::<ConfigTable>(toml_string)
            .map_err(|err| SystemError::invalid_config(path, err))?
            .config;
        if config.build_command.trim().is_empty() {
            Err(SystemError::EmptyBuildCommand)?
        }
        Ok(config)
    }

    /// File the configuration came from, `None` when defaults are in use.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

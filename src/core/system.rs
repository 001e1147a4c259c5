use crate::cli::Args;
use crate::core::app_config::AppConfig;
use crate::core::archiver::Archiver;
use crate::core::io_manager::IOManager;
use crate::model::config::Config;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::model::relative_path::{RelativePath, ROOT};
use crate::platform::local_file_system::LocalFileSystem;
use crate::platform::make_runner::MakeRunner;
use crate::platform::mounted_remote::MountedRemote;
use crate::platform::terminal_console::TerminalConsole;
use macros::log;
use std::sync::Arc;

pub struct System;

impl System {
    pub async fn run(args: Args, config: &AppConfig) -> Result<(), Error> {
        log!(SystemLog::Starting {
            version: env!("CARGO_PKG_VERSION").to_string()
        });
        match config.source() {
            Some(path) => log!(SystemLog::ConfigLoaded {
                path: path.to_path_buf()
            }),
            None => log!(SystemLog::ConfigDefaulted),
        }

        let io_manager = Self::io_manager(&args, config);
        let start = RelativePath::parse(args.path.as_deref().unwrap_or(ROOT))?;
        let build_runner = Arc::new(MakeRunner::new(
            config.build_command.clone(),
            config.build_args.clone(),
        ));

        let archiver = Archiver::new(
            &io_manager,
            build_runner,
            Arc::new(TerminalConsole),
            args.options(),
        )?;
        archiver.archive(&start).await?;

        log!(SystemLog::Finished);
        Ok(())
    }

    /// Command line roots win over the configuration file. A root missing from
    /// both leaves its storage unset.
    pub fn io_manager(args: &Args, config: &Config) -> IOManager {
        let mut io_manager = IOManager::new();

        if let Some(root) = args.local.clone().or_else(|| config.local_root.clone()) {
            log!(SystemLog::LocalStorageReady { path: root.clone() });
            io_manager.set_local_storage(Arc::new(LocalFileSystem::new(root)));
        }
        if let Some(root) = args.remote.clone().or_else(|| config.remote_root.clone()) {
            log!(SystemLog::RemoteStorageReady { path: root.clone() });
            io_manager.set_remote_storage(Arc::new(MountedRemote::new(root)));
        }

        io_manager
    }
}

use clap::Parser;
use macros::log;
use pdf_archiver::cli::Args;
use pdf_archiver::core::app_config::AppConfig;
use pdf_archiver::core::system::System;
use pdf_archiver::utils::logging::Logging;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let _guard = match Logging::initialize(&config.log_directory) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match System::run(args, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!(err);
            ExitCode::FAILURE
        }
    }
}

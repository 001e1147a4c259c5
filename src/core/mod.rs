pub mod app_config;
pub mod archiver;
pub mod io_manager;
pub mod system;

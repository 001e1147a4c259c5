pub mod config;
pub mod entry;
pub mod error;
pub mod log;
pub mod options;
pub mod relative_path;
pub mod transfer;

pub mod build_runner;
pub mod console;
pub mod file_system;

pub mod local_file_system;
pub mod make_runner;
pub mod mounted_remote;
pub mod terminal_console;

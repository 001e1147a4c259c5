pub mod archive;
pub mod build;
pub mod io;
pub mod system;

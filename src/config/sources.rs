//! Configuration sources: the resolved file and the environment.

pub mod config_file;
pub mod environment;

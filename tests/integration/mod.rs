//! Integration tests for git-pitch

mod cli_binary;
mod config_resolution;

//! CLI argument parsing and command dispatch

pub mod analyze;
pub mod args;
pub mod common;
pub mod init;
pub mod rules;
pub mod template;

pub use args::{Cli, Command};

//! Initialize a luahint project
//!
//! Writes a default luahint.toml into the target directory.

use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG};
use std::fs;
use std::path::Path;

/// Error type for init command
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What happened to luahint.toml
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Overwritten,
    /// File already existed and `force` was not set
    Skipped,
}

/// Run the init command in `dir`
///
/// # Arguments
/// * `dir` - Directory that receives luahint.toml
/// * `force` - Overwrite an existing file instead of skipping it
pub fn run_init(dir: &Path, force: bool) -> Result<InitOutcome, InitError> {
    let path = dir.join(CONFIG_FILE_NAME);

    let outcome = if path.exists() {
        if !force {
            return Ok(InitOutcome::Skipped);
        }
        InitOutcome::Overwritten
    } else {
        InitOutcome::Created
    };

    fs::write(&path, DEFAULT_CONFIG)?;
    tracing::debug!(path = %path.display(), ?outcome, "wrote configuration");
    Ok(outcome)
}

//! Helpers shared across CLI commands

use crate::config::{CONFIG_FILE_NAME, ColorOption, Config};
use crate::engine::file_walker::{FileWalker, FileWalkerError};
use crate::error::ConfigError;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

pub const EXIT_SUCCESS: i32 = 0;
/// At least one analyzed text failed the syntax heuristic
pub const EXIT_FINDINGS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
pub const EXIT_PARSE_ERROR: i32 = 3;

/// Load luahint.toml from the working directory, or defaults when absent
///
/// # Errors
///
/// Returns `ConfigError::Parse` or `ConfigError::Validation` if the file exists
/// but is invalid.
pub(crate) fn load_config() -> Result<Config, ConfigError> {
    Config::load_or_default(Path::new(CONFIG_FILE_NAME))
}

/// Discover Lua files under each path using the configured globs
///
/// Files are deduplicated, so overlapping paths analyze each file once.
///
/// # Errors
///
/// Returns `FileWalkerError` for a missing path, an invalid glob or a walk failure.
pub(crate) fn discover_files(
    paths: &[String],
    config: &Config,
) -> Result<Vec<PathBuf>, FileWalkerError> {
    let mut all_files = Vec::new();

    for path_str in paths {
        let walker = FileWalker::new(
            Path::new(path_str),
            &config.luahint.include,
            &config.luahint.exclude,
        )?;

        for result in walker.walk() {
            all_files.push(result?);
        }
    }

    all_files.sort();
    all_files.dedup();
    Ok(all_files)
}

/// Map the configured color option onto termcolor for stdout
pub(crate) fn color_choice(option: ColorOption) -> termcolor::ColorChoice {
    match option {
        ColorOption::Always => termcolor::ColorChoice::Always,
        ColorOption::Never => termcolor::ColorChoice::Never,
        ColorOption::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
        ColorOption::Auto => termcolor::ColorChoice::Never,
    }
}

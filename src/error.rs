//! Error types for luahint
//!
//! Analysis itself never fails; these errors cover the collaborators around
//! it: configuration loading, template lookup, file discovery and I/O.

use crate::engine::file_walker::FileWalkerError;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Well-formed TOML with an unacceptable value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Template lookup errors
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Unknown template '{0}'. Run 'luahint templates' to list the available ones")]
    NotFound(String),
}

/// Top-level error type for luahint
#[derive(Debug, thiserror::Error)]
pub enum LuahintError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("File walker error: {0}")]
    FileWalker(#[from] FileWalkerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Configuration file parsing and validation

pub mod luahint_toml;

pub use luahint_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, DEFAULT_CONFIG, LuahintMeta, OutputConfig,
    OutputFormat,
};

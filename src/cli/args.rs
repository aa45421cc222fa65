//! CLI argument parsing using clap

use crate::config::{ColorOption, OutputFormat};
use clap::{Parser, Subcommand};

/// luahint CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "luahint")]
#[command(about = "Heuristic analyzer for Lua source: findings, metrics and suggestions")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (overrides luahint.toml)
    #[arg(long, global = true)]
    pub color: Option<ColorOption>,

    /// Log analysis progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available luahint subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze Lua files, directories, or `-` for standard input
    Analyze {
        /// Paths to analyze (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<String>,

        /// Output format (overrides luahint.toml)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Print a code template
    Template {
        /// Template name (see `luahint templates`)
        template: String,

        /// Name substituted into the template
        #[arg(long)]
        name: Option<String>,
    },

    /// List available code templates
    Templates,

    /// List the built-in analysis rules
    Rules {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// Write a default luahint.toml
    Init {
        /// Overwrite an existing luahint.toml
        #[arg(long)]
        force: bool,
    },
}

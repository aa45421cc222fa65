//! luahint CLI entry point

use clap::Parser;
use luahint::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use luahint::cli::init::InitOutcome;
use luahint::cli::{Cli, Command};
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();
    luahint::logging::init_logging(cli.verbose);

    let exit_code = match cli.command {
        Command::Analyze { paths, format } => {
            luahint::cli::analyze::run_analyze(&paths, format, cli.color)
        }
        Command::Template { template, name } => {
            luahint::cli::template::run_template(&template, name.as_deref())
        }
        Command::Templates => luahint::cli::template::run_templates(),
        Command::Rules { format } => luahint::cli::rules::run_rules(format),
        Command::Init { force } => match luahint::cli::init::run_init(Path::new("."), force) {
            Ok(InitOutcome::Skipped) => {
                eprintln!("luahint.toml already exists. Use --force to overwrite it.");
                EXIT_SUCCESS
            }
            Ok(_) => {
                println!("Wrote luahint.toml.");
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}

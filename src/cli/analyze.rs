//! Analyze command implementation
//!
//! Loads luahint.toml, collects Lua sources and standard input (`-`), analyzes
//! them in parallel and prints the reports in the requested format. The stdin
//! report comes first, then the walked files in path order.

use crate::cli::common::{
    EXIT_ERROR, EXIT_FINDINGS, EXIT_PARSE_ERROR, EXIT_SUCCESS, color_choice, discover_files,
    load_config,
};
use crate::config::{ColorOption, OutputFormat};
use crate::engine::{AnalysisEngine, ExecutionResult, FileReport, STDIN_LABEL};
use crate::error::{ConfigError, LuahintError};
use crate::output::{HumanFormatter, JsonlFormatter};
use std::io::{self, Read, Write};
use termcolor::StandardStream;

/// Run the analyze command
///
/// # Returns
///
/// Exit code:
/// - 0: every text passed the syntax heuristic
/// - 1: at least one syntax error was reported
/// - 2: error (I/O, missing path, walk failure)
/// - 3: invalid luahint.toml
pub fn run_analyze(
    paths: &[String],
    format: Option<OutputFormat>,
    color: Option<ColorOption>,
) -> i32 {
    match run_analyze_inner(paths, format, color) {
        Ok(result) if result.syntax_errors() > 0 => EXIT_FINDINGS,
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                LuahintError::Config(ConfigError::Parse(_) | ConfigError::Validation(_)) => {
                    EXIT_PARSE_ERROR
                }
                _ => EXIT_ERROR,
            }
        }
    }
}

fn run_analyze_inner(
    paths: &[String],
    format: Option<OutputFormat>,
    color: Option<ColorOption>,
) -> Result<ExecutionResult, LuahintError> {
    let config = load_config()?;
    let format = format.unwrap_or(config.output.format);
    let color = color.unwrap_or(config.output.color);

    let (stdin_args, walk_paths): (Vec<String>, Vec<String>) =
        paths.iter().cloned().partition(|p| p == "-");

    let mut result = if walk_paths.is_empty() {
        ExecutionResult::default()
    } else {
        let files = discover_files(&walk_paths, &config)?;
        if files.is_empty() {
            tracing::warn!("no Lua files found to analyze");
        }
        tracing::info!(files = files.len(), "analyzing");
        AnalysisEngine::new().execute(files)
    };

    // Standard input is read once however many times `-` is given
    if !stdin_args.is_empty() {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        let text = String::from_utf8_lossy(&bytes);
        result.reports.insert(0, FileReport::from_text(STDIN_LABEL, &text));
    }

    match format {
        OutputFormat::Human => {
            let mut stdout = StandardStream::stdout(color_choice(color));
            HumanFormatter::new().write(&mut stdout, &result)?;
        }
        OutputFormat::Jsonl => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(JsonlFormatter::new().format(&result).as_bytes())?;
        }
    }

    Ok(result)
}

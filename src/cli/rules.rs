//! Rules command implementation
//!
//! Prints the built-in rule table in evaluation order.

use crate::analysis::builtin_rules;
use crate::cli::common::EXIT_SUCCESS;
use crate::config::OutputFormat;
use crate::output::{RuleListHumanFormatter, RuleListJsonlFormatter};

pub fn run_rules(format: OutputFormat) -> i32 {
    let rules = builtin_rules();

    let output = match format {
        OutputFormat::Human => RuleListHumanFormatter::new().format(&rules),
        OutputFormat::Jsonl => RuleListJsonlFormatter::new().format(&rules),
    };
    print!("{output}");

    EXIT_SUCCESS
}

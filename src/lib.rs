#![forbid(unsafe_code)]

//! luahint: heuristic analysis of Lua source
//!
//! Scans Lua text with a fixed table of substring and regex checks and reports
//! a syntax flag, detected patterns, performance issues, size metrics and
//! improvement suggestions. It is not a parser; findings are heuristics.
//!
//! ```
//! let report = luahint::analyze("local x = 1");
//! assert!(report.syntax.valid);
//! assert_eq!(report.metrics.line_count, 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod output;
pub mod templates;
pub mod types;

pub use analysis::{AnalysisReport, analyze};
pub use error::{ConfigError, LuahintError, TemplateError};
pub use types::{ComplexityLevel, IssueKind, PatternName, Severity, SuggestionKind};

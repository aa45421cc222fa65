#![forbid(unsafe_code)]

//! Heuristic analysis of Lua source text

mod evaluator;
mod report;
pub mod rules;

pub use evaluator::{
    analyze, analyze_performance, calculate_metrics, check_syntax, detect_patterns,
    get_suggestions,
};
pub use report::{
    AnalysisReport, DetectedPatterns, Metrics, PerformanceIssue, Suggestion, SyntaxCheck,
};
pub use rules::{RuleInfo, builtin_rules};

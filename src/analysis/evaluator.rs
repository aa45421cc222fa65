#![forbid(unsafe_code)]

//! Rule evaluation over a block of Lua source text
//!
//! Every function here is total: any text, including empty or non-Lua text,
//! yields a value. Nothing is cached between calls, so callers may analyze
//! from as many threads as they like.

use crate::analysis::report::{
    AnalysisReport, DetectedPatterns, Metrics, PerformanceIssue, Suggestion, SyntaxCheck,
};
use crate::analysis::rules::{
    CONTROL_KEYWORDS, FUNCTION_KEYWORD, PATTERN_RULES, PERFORMANCE_RULES, SUGGESTION_RULES,
    SYNTAX_ERROR_MARKERS, SYNTAX_ERROR_MESSAGE, SYNTAX_VALID_MESSAGE,
};
use crate::types::ComplexityLevel;

/// Heuristic syntax check
///
/// Looks for a few token sequences that never occur in well-formed Lua.
/// This is not a parser: plenty of broken code passes.
pub fn check_syntax(text: &str) -> SyntaxCheck {
    let malformed = SYNTAX_ERROR_MARKERS
        .iter()
        .any(|marker| text.contains(marker));

    let message = if malformed {
        SYNTAX_ERROR_MESSAGE
    } else {
        SYNTAX_VALID_MESSAGE
    };

    SyntaxCheck {
        valid: !malformed,
        message: message.to_string(),
    }
}

pub fn detect_patterns(text: &str) -> DetectedPatterns {
    let mut patterns = DetectedPatterns::default();
    for rule in PATTERN_RULES {
        patterns.set(rule.name, rule.matches(text));
    }
    patterns
}

/// Runs the performance heuristics in table order
///
/// Each heuristic contributes at most one issue and all of them run.
pub fn analyze_performance(text: &str) -> Vec<PerformanceIssue> {
    PERFORMANCE_RULES
        .iter()
        .filter(|rule| (rule.applies)(text))
        .map(|rule| PerformanceIssue {
            kind: rule.kind,
            severity: rule.severity,
            message: rule.message.to_string(),
        })
        .collect()
}

pub fn calculate_metrics(text: &str) -> Metrics {
    let line_count = text.matches('\n').count() + 1;
    let function_count = text.matches(FUNCTION_KEYWORD).count();
    let control_keywords = CONTROL_KEYWORDS.find_iter(text).count();

    Metrics {
        line_count,
        function_count,
        complexity_level: ComplexityLevel::from_keyword_count(control_keywords),
    }
}

/// Builds suggestions from the text and an already computed report
///
/// Only the report's detected patterns and metrics are read. Each rule adds
/// zero or one suggestion, in table order.
pub fn get_suggestions(text: &str, report: &AnalysisReport) -> Vec<Suggestion> {
    SUGGESTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(text, report))
        .map(|rule| Suggestion {
            kind: rule.kind,
            message: rule.message.to_string(),
            fix_hint: rule.fix_hint.map(str::to_string),
            example: rule.example.map(str::to_string),
        })
        .collect()
}

/// Analyzes one block of source text
///
/// Runs syntax, patterns, performance and metrics, then suggestions last
/// since they read the patterns and metrics.
pub fn analyze(text: &str) -> AnalysisReport {
    let findings = AnalysisReport {
        syntax: check_syntax(text),
        detected_patterns: detect_patterns(text),
        performance_issues: analyze_performance(text),
        metrics: calculate_metrics(text),
        suggestions: Vec::new(),
    };
    let suggestions = get_suggestions(text, &findings);

    tracing::trace!(
        lines = findings.metrics.line_count,
        issues = findings.performance_issues.len(),
        suggestions = suggestions.len(),
        "analyzed text"
    );

    AnalysisReport {
        suggestions,
        ..findings
    }
}

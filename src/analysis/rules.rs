#![forbid(unsafe_code)]

//! Built-in rule tables
//!
//! Every check the analyzer performs is declared here as data: a predicate
//! paired with the finding it produces. The evaluator walks these tables in
//! declaration order and never short-circuits between entries.
//!
//! Matching is deliberately loose. Keywords are found as plain substrings or
//! unanchored regex alternatives, so `before` counts as a `for` and
//! `notify` as an `if`.

use crate::analysis::report::AnalysisReport;
use crate::types::{IssueKind, PatternName, Severity, SuggestionKind};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const CONCAT_MARKER: &str = "..";
pub(crate) const LOOP_KEYWORD: &str = "for";
pub(crate) const FUNCTION_KEYWORD: &str = "function";
/// Suppresses the global-variable warning; no trailing space, unlike the
/// `uses-local-vars` marker
pub(crate) const LOCAL_KEYWORD: &str = "local";

pub(crate) const SYNTAX_VALID_MESSAGE: &str = "Valid syntax";
pub(crate) const SYNTAX_ERROR_MESSAGE: &str = "Syntax error detected";

/// Token sequences that only appear in malformed Lua
pub(crate) const SYNTAX_ERROR_MARKERS: &[&str] = &["= ;", "function )", "end end end end"];

/// Three loop keywords on one line, anything in between
///
/// Both `\r` and `\n` end a line here, so old Mac line endings split loops too.
static NESTED_LOOPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"for[^\r\n]*for[^\r\n]*for").expect("nested loop pattern is valid")
});

/// Control-flow keywords counted for the complexity level
pub(crate) static CONTROL_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"if|for|while|repeat").expect("control keyword pattern is valid"));

/// An identifier at the start of a line followed by an assignment
static TOP_LEVEL_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[a-zA-Z_][a-zA-Z0-9_]*\s*=").expect("assignment pattern is valid")
});

/// A pattern is present when any of its markers occurs in the text
#[derive(Debug)]
pub(crate) struct PatternRule {
    pub name: PatternName,
    pub markers: &'static [&'static str],
}

pub(crate) const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        name: PatternName::UsesLocalVars,
        markers: &["local "],
    },
    PatternRule {
        name: PatternName::HasComments,
        markers: &["--"],
    },
    PatternRule {
        name: PatternName::HasErrorHandling,
        markers: &["pcall", "xpcall"],
    },
    PatternRule {
        name: PatternName::HasDocumentation,
        markers: &["--[["],
    },
    PatternRule {
        name: PatternName::UsesModules,
        markers: &["require", "module"],
    },
];

impl PatternRule {
    pub fn matches(&self, text: &str) -> bool {
        self.markers.iter().any(|marker| text.contains(marker))
    }
}

/// Emits at most one performance issue
pub(crate) struct PerformanceRule {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: &'static str,
    pub applies: fn(&str) -> bool,
}

impl std::fmt::Debug for PerformanceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerformanceRule")
            .field("kind", &self.kind)
            .field("severity", &self.severity)
            .field("message", &self.message)
            .finish()
    }
}

pub(crate) const PERFORMANCE_RULES: &[PerformanceRule] = &[
    PerformanceRule {
        kind: IssueKind::StringConcatenation,
        severity: Severity::Medium,
        message: "String concatenation inside a loop detected",
        applies: concatenates_in_loop,
    },
    PerformanceRule {
        kind: IssueKind::NestedLoops,
        severity: Severity::High,
        message: "Deeply nested loops can hurt performance",
        applies: has_nested_loops,
    },
];

/// Emits at most one suggestion, possibly reading the partial report
pub(crate) struct SuggestionRule {
    pub kind: SuggestionKind,
    pub message: &'static str,
    pub fix_hint: Option<&'static str>,
    pub example: Option<&'static str>,
    pub applies: fn(&str, &AnalysisReport) -> bool,
}

impl std::fmt::Debug for SuggestionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionRule")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("fix_hint", &self.fix_hint)
            .field("example", &self.example)
            .finish()
    }
}

pub(crate) const SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        kind: SuggestionKind::Warning,
        message: "Consider using local variables instead of globals",
        fix_hint: Some("Add 'local' before variable declarations"),
        example: None,
        applies: assigns_globals,
    },
    SuggestionRule {
        kind: SuggestionKind::Performance,
        message: "Avoid string concatenation inside loops",
        fix_hint: None,
        example: Some("Use table.concat() for better performance"),
        applies: |text, _| concatenates_in_loop(text),
    },
    SuggestionRule {
        kind: SuggestionKind::BestPractice,
        message: "Consider adding error handling with pcall/xpcall",
        fix_hint: None,
        example: None,
        applies: |_, report| {
            !report.detected_patterns.has_error_handling && report.metrics.function_count > 0
        },
    },
    SuggestionRule {
        kind: SuggestionKind::Documentation,
        message: "Add comments to improve code readability",
        fix_hint: None,
        example: None,
        applies: |_, report| {
            !report.detected_patterns.has_comments && report.metrics.line_count > 10
        },
    },
];

fn concatenates_in_loop(text: &str) -> bool {
    text.contains(CONCAT_MARKER) && text.contains(LOOP_KEYWORD)
}

fn has_nested_loops(text: &str) -> bool {
    NESTED_LOOPS.is_match(text)
}

fn assigns_globals(text: &str, _report: &AnalysisReport) -> bool {
    TOP_LEVEL_ASSIGNMENT.is_match(text) && !text.contains(LOCAL_KEYWORD)
}

/// Summary of one table entry, for listing the built-in rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    pub id: String,
    pub category: &'static str,
    pub description: String,
}

/// Describes every built-in rule in evaluation order
pub fn builtin_rules() -> Vec<RuleInfo> {
    let mut rules = vec![RuleInfo {
        id: "syntax".to_string(),
        category: "syntax",
        description: format!(
            "Flags text containing any of: {}",
            SYNTAX_ERROR_MARKERS
                .iter()
                .map(|marker| format!("'{marker}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }];

    rules.extend(PATTERN_RULES.iter().map(|rule| RuleInfo {
        id: rule.name.as_str().to_string(),
        category: "pattern",
        description: format!(
            "Present when the text contains {}",
            rule.markers
                .iter()
                .map(|marker| format!("'{marker}'"))
                .collect::<Vec<_>>()
                .join(" or ")
        ),
    }));

    rules.extend(PERFORMANCE_RULES.iter().map(|rule| RuleInfo {
        id: rule.kind.as_str().to_string(),
        category: "performance",
        description: format!("{} ({})", rule.message, rule.severity),
    }));

    rules.extend(SUGGESTION_RULES.iter().map(|rule| RuleInfo {
        id: format!("suggest-{}", rule.kind.as_str()),
        category: "suggestion",
        description: rule.message.to_string(),
    }));

    rules
}

#![forbid(unsafe_code)]

//! Core domain types for luahint
//!
//! Small closed vocabularies shared by the analyzer, the formatters and the
//! configuration layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a performance issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse three-bucket classification of control-flow density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl ComplexityLevel {
    /// Step function over the number of control-keyword occurrences
    ///
    /// More than 10 is high, more than 5 is medium, anything else is low.
    pub fn from_keyword_count(count: usize) -> Self {
        if count > 10 {
            ComplexityLevel::High
        } else if count > 5 {
            ComplexityLevel::Medium
        } else {
            ComplexityLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Low => "low",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::High => "high",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a performance issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    StringConcatenation,
    NestedLoops,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::StringConcatenation => "string-concatenation",
            IssueKind::NestedLoops => "nested-loops",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of an improvement suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    Warning,
    Performance,
    BestPractice,
    Documentation,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Warning => "warning",
            SuggestionKind::Performance => "performance",
            SuggestionKind::BestPractice => "best-practice",
            SuggestionKind::Documentation => "documentation",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the source patterns the analyzer looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternName {
    UsesLocalVars,
    HasComments,
    HasErrorHandling,
    HasDocumentation,
    UsesModules,
}

impl PatternName {
    /// All pattern names in report order
    pub const ALL: [PatternName; 5] = [
        PatternName::UsesLocalVars,
        PatternName::HasComments,
        PatternName::HasErrorHandling,
        PatternName::HasDocumentation,
        PatternName::UsesModules,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternName::UsesLocalVars => "uses-local-vars",
            PatternName::HasComments => "has-comments",
            PatternName::HasErrorHandling => "has-error-handling",
            PatternName::HasDocumentation => "has-documentation",
            PatternName::UsesModules => "uses-modules",
        }
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A glob pattern for file matching
///
/// Thin wrapper compiled with the `globset` crate by the file walker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}

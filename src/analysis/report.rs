#![forbid(unsafe_code)]

//! Value objects produced by one analysis call

use crate::types::{ComplexityLevel, IssueKind, PatternName, Severity, SuggestionKind};
use serde::{Deserialize, Serialize};

/// Outcome of the syntax heuristic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxCheck {
    pub valid: bool,
    pub message: String,
}

/// Which of the fixed source patterns are present
///
/// Keyed by [`PatternName`]; every key is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPatterns {
    pub uses_local_vars: bool,
    pub has_comments: bool,
    pub has_error_handling: bool,
    pub has_documentation: bool,
    pub uses_modules: bool,
}

impl DetectedPatterns {
    pub fn get(&self, name: PatternName) -> bool {
        match name {
            PatternName::UsesLocalVars => self.uses_local_vars,
            PatternName::HasComments => self.has_comments,
            PatternName::HasErrorHandling => self.has_error_handling,
            PatternName::HasDocumentation => self.has_documentation,
            PatternName::UsesModules => self.uses_modules,
        }
    }

    pub(crate) fn set(&mut self, name: PatternName, present: bool) {
        let slot = match name {
            PatternName::UsesLocalVars => &mut self.uses_local_vars,
            PatternName::HasComments => &mut self.has_comments,
            PatternName::HasErrorHandling => &mut self.has_error_handling,
            PatternName::HasDocumentation => &mut self.has_documentation,
            PatternName::UsesModules => &mut self.uses_modules,
        };
        *slot = present;
    }

    /// Iterates `(name, present)` pairs in [`PatternName::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (PatternName, bool)> + '_ {
        PatternName::ALL
            .into_iter()
            .map(move |name| (name, self.get(name)))
    }
}

/// A performance finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceIssue {
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
}

/// Size and shape measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Line breaks plus one, so empty text has one line
    pub line_count: usize,
    pub function_count: usize,
    pub complexity_level: ComplexityLevel,
}

/// An improvement suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Everything one analysis call found
///
/// Built fresh from the input text and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub syntax: SyntaxCheck,
    pub detected_patterns: DetectedPatterns,
    pub performance_issues: Vec<PerformanceIssue>,
    pub metrics: Metrics,
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisReport {
    pub fn syntax_valid(&self) -> bool {
        self.syntax.valid
    }

    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.performance_issues.iter().any(|issue| issue.kind == kind)
    }

    pub fn has_suggestion(&self, kind: SuggestionKind) -> bool {
        self.suggestions.iter().any(|s| s.kind == kind)
    }
}

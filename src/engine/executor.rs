#![forbid(unsafe_code)]

//! Parallel analysis of discovered files
//!
//! The analyzer keeps no state between calls, so files are simply fanned out
//! across the rayon pool and analyzed independently.

use crate::analysis::{AnalysisReport, analyze};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Label used for text read from standard input
pub const STDIN_LABEL: &str = "<stdin>";

/// The report for one analyzed source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Source path, or `<stdin>`
    pub file: PathBuf,
    pub report: AnalysisReport,
}

impl FileReport {
    pub fn from_text(file: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            file: file.into(),
            report: analyze(text),
        }
    }
}

/// Result of analyzing a batch of files
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// One report per readable file, sorted by path
    pub reports: Vec<FileReport>,
    /// Files that could not be read
    pub skipped: Vec<PathBuf>,
}

impl ExecutionResult {
    pub fn syntax_errors(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| !r.report.syntax_valid())
            .count()
    }

    pub fn total_suggestions(&self) -> usize {
        self.reports.iter().map(|r| r.report.suggestions.len()).sum()
    }

    pub fn total_performance_issues(&self) -> usize {
        self.reports
            .iter()
            .map(|r| r.report.performance_issues.len())
            .sum()
    }
}

/// Runs the analyzer over many files
#[derive(Debug, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    pub fn new() -> Self {
        AnalysisEngine
    }

    /// Analyze every file in parallel
    ///
    /// Unreadable files are logged and listed in `skipped`; they never abort
    /// the batch.
    pub fn execute(&self, files: Vec<PathBuf>) -> ExecutionResult {
        let outcomes: Vec<Result<FileReport, PathBuf>> =
            files.par_iter().map(|path| self.execute_file(path)).collect();

        let mut result = ExecutionResult::default();
        for outcome in outcomes {
            match outcome {
                Ok(report) => result.reports.push(report),
                Err(path) => result.skipped.push(path),
            }
        }
        result.reports.sort_by(|a, b| a.file.cmp(&b.file));
        result.skipped.sort();

        tracing::debug!(
            analyzed = result.reports.len(),
            skipped = result.skipped.len(),
            "batch analysis finished"
        );

        result
    }

    /// Invalid UTF-8 is replaced rather than rejected; every rule marker is ASCII.
    fn execute_file(&self, path: &Path) -> Result<FileReport, PathBuf> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read file, skipping");
                return Err(path.to_path_buf());
            }
        };

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "analyzing");
        Ok(FileReport::from_text(path, &String::from_utf8_lossy(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IssueKind;

    #[test]
    fn test_execute_sorts_reports() {
        let dir = tempfile::tempdir().unwrap();
        let b = dir.path().join("b.lua");
        let a = dir.path().join("a.lua");
        fs::write(&b, "x = 1").unwrap();
        fs::write(&a, "local x = 1").unwrap();

        let result = AnalysisEngine::new().execute(vec![b.clone(), a.clone()]);
        let files: Vec<&PathBuf> = result.reports.iter().map(|r| &r.file).collect();
        assert_eq!(files, vec![&a, &b]);
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_execute_skips_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.lua");
        let present = dir.path().join("here.lua");
        fs::write(&present, "print(1)").unwrap();

        let result = AnalysisEngine::new().execute(vec![missing.clone(), present]);
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.skipped, vec![missing]);
    }

    #[test]
    fn test_execute_accepts_latin1_source() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("latin1.lua");
        fs::write(&file, b"-- coment\xe1rio\nx = ;\n").unwrap();

        let result = AnalysisEngine::new().execute(vec![file]);
        assert!(result.skipped.is_empty());
        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.syntax_errors(), 1);
        assert!(result.reports[0].report.detected_patterns.has_comments);
    }

    #[test]
    fn test_totals() {
        let reports = vec![
            FileReport::from_text("a.lua", "x = ;"),
            FileReport::from_text("b.lua", "s = ''\nfor i=1,2 do s = s .. i end"),
        ];
        let result = ExecutionResult {
            reports,
            skipped: Vec::new(),
        };
        assert_eq!(result.syntax_errors(), 1);
        assert_eq!(result.total_performance_issues(), 1);
        assert!(result.reports[1].report.has_issue(IssueKind::StringConcatenation));
        // a.lua: global warning; b.lua: global warning + performance
        assert_eq!(result.total_suggestions(), 3);
    }
}

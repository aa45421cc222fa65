#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! One `report` record per analyzed file in path order, one `skipped` record
//! per unreadable file, then a single `summary` record.

use crate::analysis::AnalysisReport;
use crate::engine::ExecutionResult;
use serde::Serialize;
use std::path::Path;

/// JSONL output formatter
#[derive(Debug, Default)]
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut output = String::new();

        for file_report in &result.reports {
            push_line(
                &mut output,
                &ReportRecord {
                    record_type: "report",
                    file: &file_report.file,
                    report: &file_report.report,
                },
            );
        }

        for path in &result.skipped {
            push_line(
                &mut output,
                &SkippedRecord {
                    record_type: "skipped",
                    file: path,
                },
            );
        }

        push_line(
            &mut output,
            &SummaryRecord {
                record_type: "summary",
                files: result.reports.len(),
                skipped: result.skipped.len(),
                syntax_errors: result.syntax_errors(),
                suggestions: result.total_suggestions(),
                performance_issues: result.total_performance_issues(),
            },
        );

        output
    }
}

fn push_line<T: Serialize>(output: &mut String, record: &T) {
    match serde_json::to_string(record) {
        Ok(json) => {
            output.push_str(&json);
            output.push('\n');
        }
        Err(e) => tracing::warn!(error = %e, "failed to serialize record"),
    }
}

#[derive(Debug, Serialize)]
struct ReportRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: &'a Path,
    report: &'a AnalysisReport,
}

#[derive(Debug, Serialize)]
struct SkippedRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: &'a Path,
}

#[derive(Debug, Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    files: usize,
    skipped: usize,
    syntax_errors: usize,
    suggestions: usize,
    performance_issues: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FileReport;
    use serde_json::Value;
    use std::path::PathBuf;

    fn parse_lines(output: &str) -> Vec<Value> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_record_order_and_shape() {
        let result = ExecutionResult {
            reports: vec![
                FileReport::from_text("a.lua", "local x = 1"),
                FileReport::from_text("b.lua", "x = ;"),
            ],
            skipped: vec![PathBuf::from("c.lua")],
        };

        let lines = parse_lines(&JsonlFormatter::new().format(&result));
        assert_eq!(lines.len(), 4);

        assert_eq!(lines[0]["type"], "report");
        assert_eq!(lines[0]["file"], "a.lua");
        assert_eq!(lines[0]["report"]["syntax"]["valid"], true);
        assert_eq!(
            lines[0]["report"]["detected_patterns"]["uses_local_vars"],
            true
        );
        assert_eq!(lines[0]["report"]["metrics"]["line_count"], 1);
        assert_eq!(lines[0]["report"]["metrics"]["complexity_level"], "low");

        assert_eq!(lines[1]["report"]["syntax"]["valid"], false);
        assert_eq!(lines[1]["report"]["suggestions"][0]["kind"], "warning");

        assert_eq!(lines[2]["type"], "skipped");
        assert_eq!(lines[2]["file"], "c.lua");

        assert_eq!(lines[3]["type"], "summary");
        assert_eq!(lines[3]["files"], 2);
        assert_eq!(lines[3]["skipped"], 1);
        assert_eq!(lines[3]["syntax_errors"], 1);
    }

    #[test]
    fn test_empty_result_emits_summary_only() {
        let lines = parse_lines(&JsonlFormatter::new().format(&ExecutionResult::default()));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "summary");
        assert_eq!(lines[0]["files"], 0);
    }

    #[test]
    fn test_performance_issue_fields() {
        let result = ExecutionResult {
            reports: vec![FileReport::from_text(
                "loops.lua",
                "for a for b for c do s = s .. c end",
            )],
            skipped: Vec::new(),
        };
        let lines = parse_lines(&JsonlFormatter::new().format(&result));
        let issues = &lines[0]["report"]["performance_issues"];
        assert_eq!(issues[0]["kind"], "string-concatenation");
        assert_eq!(issues[0]["severity"], "medium");
        assert_eq!(issues[1]["kind"], "nested-loops");
        assert_eq!(issues[1]["severity"], "high");
    }
}

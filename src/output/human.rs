#![forbid(unsafe_code)]

//! Human-readable report rendering
//!
//! Writes through `termcolor` so the same code serves colored terminals,
//! plain pipes and in-memory buffers.

use crate::engine::{ExecutionResult, FileReport};
use std::io;
use termcolor::{Color, ColorSpec, NoColor, WriteColor};

/// Human-readable formatter
#[derive(Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        HumanFormatter
    }

    /// Render without color, mainly for tests and snapshots
    pub fn format(&self, result: &ExecutionResult) -> String {
        let mut out = NoColor::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write(&mut out, result);
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    /// Write every report followed by a summary line
    pub fn write<W: WriteColor>(&self, out: &mut W, result: &ExecutionResult) -> io::Result<()> {
        for file_report in &result.reports {
            self.write_report(out, file_report)?;
            writeln!(out)?;
        }

        for path in &result.skipped {
            set_color(out, Color::Yellow, false)?;
            write!(out, "skipped")?;
            out.reset()?;
            writeln!(out, ": {} (unreadable)", path.display())?;
        }

        writeln!(
            out,
            "Analyzed {} file(s): {} syntax error(s), {} suggestion(s), {} performance issue(s)",
            result.reports.len(),
            result.syntax_errors(),
            result.total_suggestions(),
            result.total_performance_issues()
        )
    }

    /// Write one report: syntax, suggestions, metrics, performance
    pub fn write_report<W: WriteColor>(
        &self,
        out: &mut W,
        file_report: &FileReport,
    ) -> io::Result<()> {
        let report = &file_report.report;

        set_color(out, Color::Cyan, true)?;
        writeln!(out, "=== {} ===", file_report.file.display())?;
        out.reset()?;
        writeln!(out)?;

        heading(out, "SYNTAX")?;
        if report.syntax.valid {
            set_color(out, Color::Green, false)?;
            writeln!(out, "✓ Code is syntactically valid")?;
        } else {
            set_color(out, Color::Red, true)?;
            writeln!(out, "✗ {}", report.syntax.message)?;
        }
        out.reset()?;
        writeln!(out)?;

        if !report.suggestions.is_empty() {
            heading(out, "SUGGESTIONS")?;
            for suggestion in &report.suggestions {
                writeln!(out, "• [{}] {}", suggestion.kind, suggestion.message)?;
                if let Some(fix) = &suggestion.fix_hint {
                    writeln!(out, "    fix: {fix}")?;
                }
                if let Some(example) = &suggestion.example {
                    writeln!(out, "    example: {example}")?;
                }
            }
            writeln!(out)?;
        }

        heading(out, "METRICS")?;
        writeln!(out, "• Lines of code: {}", report.metrics.line_count)?;
        writeln!(out, "• Functions found: {}", report.metrics.function_count)?;
        writeln!(
            out,
            "• Estimated complexity: {}",
            report.metrics.complexity_level
        )?;

        if !report.performance_issues.is_empty() {
            writeln!(out)?;
            heading(out, "PERFORMANCE")?;
            for issue in &report.performance_issues {
                set_color(out, Color::Yellow, false)?;
                write!(out, "⚠ [{}]", issue.severity)?;
                out.reset()?;
                writeln!(out, " {}", issue.message)?;
            }
        }

        Ok(())
    }
}

fn heading<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{title}:")?;
    out.reset()
}

fn set_color<W: WriteColor>(out: &mut W, color: Color, bold: bool) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn single(text: &str) -> ExecutionResult {
        ExecutionResult {
            reports: vec![FileReport::from_text("demo.lua", text)],
            skipped: Vec::new(),
        }
    }

    #[test]
    fn test_clean_report_has_no_optional_sections() {
        let output = HumanFormatter::new().format(&single("local x = 1"));

        assert!(output.contains("=== demo.lua ==="));
        assert!(output.contains("✓ Code is syntactically valid"));
        assert!(!output.contains("SUGGESTIONS:"));
        assert!(!output.contains("PERFORMANCE:"));
        assert!(output.contains("• Lines of code: 1"));
        assert!(output.contains("• Functions found: 0"));
        assert!(output.contains("• Estimated complexity: low"));
        assert!(output.contains(
            "Analyzed 1 file(s): 0 syntax error(s), 0 suggestion(s), 0 performance issue(s)"
        ));
    }

    #[test]
    fn test_problem_report_sections() {
        let text = "result = ''\nfor i=1,10 do\nresult = result .. i\nend";
        let output = HumanFormatter::new().format(&single(text));

        assert!(output.contains("SUGGESTIONS:"));
        assert!(output.contains("• [warning] Consider using local variables instead of globals"));
        assert!(output.contains("    fix: Add 'local' before variable declarations"));
        assert!(output.contains("    example: Use table.concat() for better performance"));
        assert!(output.contains("PERFORMANCE:"));
        assert!(output.contains("⚠ [medium] String concatenation inside a loop detected"));
    }

    #[test]
    fn test_syntax_error_line() {
        let output = HumanFormatter::new().format(&single("x = ;"));
        assert!(output.contains("✗ Syntax error detected"));
    }

    #[test]
    fn test_skipped_files_listed() {
        let result = ExecutionResult {
            reports: Vec::new(),
            skipped: vec![PathBuf::from("locked.lua")],
        };
        let output = HumanFormatter::new().format(&result);
        assert!(output.contains("skipped: locked.lua (unreadable)"));
        assert!(output.contains("Analyzed 0 file(s)"));
    }

    #[test]
    fn test_colored_output_contains_escapes() {
        let mut out = termcolor::Ansi::new(Vec::new());
        HumanFormatter::new()
            .write(&mut out, &single("x = ;"))
            .unwrap();
        let rendered = String::from_utf8(out.into_inner()).unwrap();
        assert!(rendered.contains("\x1b["));
    }
}

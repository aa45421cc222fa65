#![forbid(unsafe_code)]

//! Formatters for the `luahint rules` listing

use crate::analysis::RuleInfo;
use serde::Serialize;

/// Human-readable formatter for the built-in rule table
#[derive(Debug, Default)]
pub struct RuleListHumanFormatter;

impl RuleListHumanFormatter {
    pub fn new() -> Self {
        RuleListHumanFormatter
    }

    pub fn format(&self, rules: &[RuleInfo]) -> String {
        let mut output = format!("Rules ({} built in):\n\n", rules.len());

        let width = rules.iter().map(|r| r.id.len()).max().unwrap_or(0);
        let mut category = "";
        for rule in rules {
            if rule.category != category {
                category = rule.category;
                output.push_str(&format!("[{category}]\n"));
            }
            output.push_str(&format!(
                "  {:width$}  {}\n",
                rule.id,
                rule.description,
                width = width
            ));
        }

        output
    }
}

#[derive(Debug, Serialize)]
struct JsonlRule<'a> {
    id: &'a str,
    category: &'a str,
    description: &'a str,
}

/// JSONL formatter for the built-in rule table
#[derive(Debug, Default)]
pub struct RuleListJsonlFormatter;

impl RuleListJsonlFormatter {
    pub fn new() -> Self {
        RuleListJsonlFormatter
    }

    /// One JSON object per rule, in evaluation order
    pub fn format(&self, rules: &[RuleInfo]) -> String {
        let mut output = String::new();

        for rule in rules {
            let record = JsonlRule {
                id: &rule.id,
                category: rule.category,
                description: &rule.description,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }
}

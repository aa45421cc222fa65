//! Output formatters for analysis results and rule listings

pub mod human;
pub mod jsonl;
pub mod rule_list;

pub use human::HumanFormatter;
pub use jsonl::JsonlFormatter;
pub use rule_list::{RuleListHumanFormatter, RuleListJsonlFormatter};

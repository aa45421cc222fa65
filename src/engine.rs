//! File discovery and batch analysis

pub mod executor;
pub mod file_walker;

pub use executor::{AnalysisEngine, ExecutionResult, FileReport, STDIN_LABEL};
pub use file_walker::{FileWalker, FileWalkerError};

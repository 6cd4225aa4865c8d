//! Flag report presentation

pub mod formatter;
pub mod report;

pub use formatter::{
    ConsoleFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter, ReportGenerator,
};
pub use report::{FlagReport, FlaggedCandidate};

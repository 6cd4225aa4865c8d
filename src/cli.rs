//! CLI interface for the candidate flagger

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "candidate-flagger")]
#[command(about = "Duplicate-candidate detection for recruiting platforms")]
#[command(
    long_about = "Scan a candidate directory for records sharing a phone number, LinkedIn URL, or GitHub URL after normalization, and report duplicate flags"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect duplicate candidates across the full record population
    Detect {
        /// Path to candidate records file (JSON array or JSON Lines)
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save rendered report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show per-reason shared-candidate breakdown
        #[arg(short, long)]
        detailed: bool,
    },

    /// Look up flag information for specific candidate ids
    Inspect {
        /// Path to candidate records file (JSON array or JSON Lines)
        #[arg(short, long)]
        records: Option<PathBuf>,

        /// Candidate ids to look up (comma-separated)
        #[arg(short, long, value_delimiter = ',', required = true)]
        ids: Vec<i64>,
    },

    /// Print the canonical comparison key for one contact value
    Normalize {
        #[command(subcommand)]
        target: NormalizeTarget,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum NormalizeTarget {
    /// Normalize a LinkedIn or GitHub URL
    Url {
        /// Raw URL value
        value: String,
    },

    /// Normalize a phone number
    Phone {
        /// Raw phone value
        value: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("a.json"), &["json", "jsonl"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("a.csv"), &["json", "jsonl"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("noext"), &["json"]).is_err());
    }
}

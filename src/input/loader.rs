//! Candidate record loading from files

use crate::error::{CandidateFlaggerError, Result};
use crate::flagging::detector::CandidateRecord;
use log::{debug, info};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordFormat {
    Json,
    JsonLines,
    Unknown,
}

impl RecordFormat {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => RecordFormat::Json,
            "jsonl" | "ndjson" => RecordFormat::JsonLines,
            _ => RecordFormat::Unknown,
        }
    }
}

/// Loads fully materialized candidate-record collections from disk.
///
/// Detection requires the whole population up front, so the loader always
/// reads and parses the entire file before returning.
pub struct RecordLoader;

impl RecordLoader {
    /// Load all candidate records from a `.json` array or `.jsonl` file
    pub fn load(path: &Path) -> Result<Vec<CandidateRecord>> {
        let format = Self::detect_format(path)?;
        debug!("Loading candidate records from {:?} as {:?}", path, format);

        let content = std::fs::read_to_string(path)?;
        let records = match format {
            RecordFormat::Json => Self::parse_json(&content)?,
            RecordFormat::JsonLines => Self::parse_json_lines(&content)?,
            RecordFormat::Unknown => unreachable!("detect_format rejects unknown formats"),
        };

        info!("Loaded {} candidate records from {}", records.len(), path.display());
        Ok(records)
    }

    fn detect_format(path: &Path) -> Result<RecordFormat> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                CandidateFlaggerError::UnsupportedFormat(format!(
                    "{} has no file extension",
                    path.display()
                ))
            })?;

        match RecordFormat::from_extension(ext) {
            RecordFormat::Unknown => Err(CandidateFlaggerError::UnsupportedFormat(format!(
                ".{} (expected .json or .jsonl)",
                ext
            ))),
            format => Ok(format),
        }
    }

    fn parse_json(content: &str) -> Result<Vec<CandidateRecord>> {
        let records: Vec<CandidateRecord> = serde_json::from_str(content)?;
        Ok(records)
    }

    fn parse_json_lines(content: &str) -> Result<Vec<CandidateRecord>> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_no, line)| {
                serde_json::from_str(line).map_err(|e| {
                    CandidateFlaggerError::RecordLoading(format!(
                        "line {}: {}",
                        line_no + 1,
                        e
                    ))
                })
            })
            .collect()
    }
}

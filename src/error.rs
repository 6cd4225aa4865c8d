//! Error handling for the candidate flagger application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CandidateFlaggerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Record loading error: {0}")]
    RecordLoading(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CandidateFlaggerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CandidateFlaggerError {
    fn from(err: anyhow::Error) -> Self {
        CandidateFlaggerError::InvalidInput(err.to_string())
    }
}

//! Candidate flagger library

pub mod cli;
pub mod config;
pub mod error;
pub mod flagging;
pub mod input;
pub mod output;

pub use config::Config;
pub use error::{CandidateFlaggerError, Result};
pub use flagging::detector::{CandidateRecord, FlagEntry, FlagMap, FlagReason};

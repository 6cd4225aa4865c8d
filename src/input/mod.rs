//! Candidate record input boundary

pub mod loader;

pub use loader::{RecordFormat, RecordLoader};

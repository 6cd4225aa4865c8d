//! Duplicate-candidate flagging engine

pub mod detector;
pub mod normalizer;
pub mod reporter;

pub use detector::{
    detect_flagged_candidates, get_flag_info_for_candidates, CandidateRecord, FlagEntry, FlagMap,
    FlagReason,
};
pub use normalizer::{normalize_phone, normalize_url};
pub use reporter::{format_flag_reason, format_flag_reason_codes};

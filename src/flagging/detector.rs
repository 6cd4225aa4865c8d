//! Duplicate-candidate detection across normalized contact fields

use crate::flagging::normalizer::{normalize_phone, normalize_url};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A candidate (student/applicant) record as supplied by the user directory.
///
/// Read-only input to detection. `name` and `email` are carried only for
/// report display; grouping looks at `phone`, `linkedin_url` and `github_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// Closed reason-code vocabulary, stable across API and UI layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagReason {
    SameMobile,
    SameLinkedin,
    SameGithub,
}

impl FlagReason {
    /// Wire-format reason code
    pub fn code(&self) -> &'static str {
        match self {
            FlagReason::SameMobile => "same_mobile",
            FlagReason::SameLinkedin => "same_linkedin",
            FlagReason::SameGithub => "same_github",
        }
    }

    /// Human-readable field label for report text
    pub fn label(&self) -> &'static str {
        match self {
            FlagReason::SameMobile => "Mobile number",
            FlagReason::SameLinkedin => "LinkedIn",
            FlagReason::SameGithub => "GitHub",
        }
    }

    /// Parse a wire-format reason code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "same_mobile" => Some(FlagReason::SameMobile),
            "same_linkedin" => Some(FlagReason::SameLinkedin),
            "same_github" => Some(FlagReason::SameGithub),
            _ => None,
        }
    }
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Flag information for one candidate.
///
/// `reasons` holds one entry per field type the candidate collided on, in
/// fixed detection order (mobile, LinkedIn, GitHub). `flagged_with` maps each
/// reason to the *other* candidate ids sharing that key; a candidate's own id
/// never appears in its own lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlagEntry {
    pub reasons: Vec<FlagReason>,
    pub flagged_with: HashMap<FlagReason, Vec<i64>>,
}

/// Detection result: flagged candidate id to flag information
pub type FlagMap = HashMap<i64, FlagEntry>;

/// Detect all flagged candidates across the full record population.
///
/// Builds one normalized grouping map per contact field, then expands every
/// group with more than one member into flag entries. The scan is a pure
/// function of its input: no caching, no incremental state, safe to run
/// concurrently. Malformed field values degrade through the normalizer and a
/// record with no usable contact fields simply contributes nothing.
pub fn detect_flagged_candidates(records: &[CandidateRecord]) -> FlagMap {
    info!(
        "Starting candidate flagging detection across {} records",
        records.len()
    );

    let mut phone_groups: HashMap<String, Vec<i64>> = HashMap::new();
    let mut linkedin_groups: HashMap<String, Vec<i64>> = HashMap::new();
    let mut github_groups: HashMap<String, Vec<i64>> = HashMap::new();

    for record in records {
        if let Some(key) = normalize_phone(record.phone.as_deref()) {
            phone_groups.entry(key).or_default().push(record.id);
        }
        if let Some(key) = normalize_url(record.linkedin_url.as_deref()) {
            linkedin_groups.entry(key).or_default().push(record.id);
        }
        if let Some(key) = normalize_url(record.github_url.as_deref()) {
            github_groups.entry(key).or_default().push(record.id);
        }
    }

    let mut flagged = FlagMap::new();

    // Field order is a stable contract: reasons accumulate as mobile,
    // then LinkedIn, then GitHub.
    collect_collisions(&mut flagged, &phone_groups, FlagReason::SameMobile);
    collect_collisions(&mut flagged, &linkedin_groups, FlagReason::SameLinkedin);
    collect_collisions(&mut flagged, &github_groups, FlagReason::SameGithub);

    info!(
        "Flagging detection complete, found {} flagged candidates",
        flagged.len()
    );

    flagged
}

fn collect_collisions(
    flagged: &mut FlagMap,
    groups: &HashMap<String, Vec<i64>>,
    reason: FlagReason,
) {
    for (key, ids) in groups {
        if ids.len() < 2 {
            continue;
        }

        warn!(
            "Found {} candidates sharing the same {} key '{}'",
            ids.len(),
            reason.label(),
            key
        );

        for &id in ids {
            let entry = flagged.entry(id).or_default();
            entry.reasons.push(reason);
            entry.flagged_with.insert(
                reason,
                ids.iter().copied().filter(|&other| other != id).collect(),
            );
        }
    }
}

/// Get flag information for a specific set of candidates.
///
/// Runs the full-population detection first, then narrows to the requested
/// ids. The full scan is required for correctness: a requested candidate may
/// collide with records outside the requested subset.
pub fn get_flag_info_for_candidates(ids: &[i64], records: &[CandidateRecord]) -> FlagMap {
    let mut all_flagged = detect_flagged_candidates(records);

    ids.iter()
        .filter_map(|id| all_flagged.remove_entry(id))
        .collect()
}

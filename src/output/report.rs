//! Flag report structures for the presentation/API layer

use crate::flagging::detector::{CandidateRecord, FlagMap, FlagReason};
use crate::flagging::reporter::format_flag_reason;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Serializable result of one detection pass
#[derive(Debug, Clone, Serialize)]
pub struct FlagReport {
    pub generated_at: DateTime<Utc>,
    pub total_records: usize,
    pub flagged_count: usize,
    pub candidates: Vec<FlaggedCandidate>,
}

/// One flagged candidate with wire reason codes and display summary
#[derive(Debug, Clone, Serialize)]
pub struct FlaggedCandidate {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub reasons: Vec<FlagReason>,
    pub flagged_with: HashMap<FlagReason, Vec<i64>>,
    pub summary: String,
}

impl FlagReport {
    /// Build a report from a detection result, ordered by candidate id
    pub fn build(records: &[CandidateRecord], flags: &FlagMap) -> Self {
        let by_id: HashMap<i64, &CandidateRecord> =
            records.iter().map(|r| (r.id, r)).collect();

        let mut candidates: Vec<FlaggedCandidate> = flags
            .iter()
            .map(|(&id, entry)| FlaggedCandidate {
                id,
                name: by_id.get(&id).and_then(|r| r.name.clone()),
                email: by_id.get(&id).and_then(|r| r.email.clone()),
                reasons: entry.reasons.clone(),
                flagged_with: entry.flagged_with.clone(),
                summary: format_flag_reason(&entry.reasons),
            })
            .collect();
        candidates.sort_by_key(|c| c.id);

        Self {
            generated_at: Utc::now(),
            total_records: records.len(),
            flagged_count: candidates.len(),
            candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flagging::detector::detect_flagged_candidates;

    fn with_phone(id: i64, name: &str, phone: &str) -> CandidateRecord {
        CandidateRecord {
            id,
            name: Some(name.to_string()),
            email: None,
            phone: Some(phone.to_string()),
            linkedin_url: None,
            github_url: None,
        }
    }

    #[test]
    fn test_report_build_sorted_with_summaries() {
        let records = vec![
            with_phone(7, "Bob", "555-0001"),
            with_phone(3, "Alice", "555-0001"),
            with_phone(5, "Carol", "555-9999"),
        ];
        let flags = detect_flagged_candidates(&records);

        let report = FlagReport::build(&records, &flags);

        assert_eq!(report.total_records, 3);
        assert_eq!(report.flagged_count, 2);
        assert_eq!(report.candidates[0].id, 3);
        assert_eq!(report.candidates[1].id, 7);
        assert_eq!(report.candidates[0].name.as_deref(), Some("Alice"));
        assert_eq!(report.candidates[0].summary, "Same Mobile number");
    }

    #[test]
    fn test_report_serializes_wire_codes() {
        let records = vec![
            with_phone(1, "A", "555-0001"),
            with_phone(2, "B", "555-0001"),
        ];
        let flags = detect_flagged_candidates(&records);
        let report = FlagReport::build(&records, &flags);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"same_mobile\""));
        assert!(json.contains("\"flagged_count\":2"));
    }
}

//! Integration tests for the candidate flagger

use candidate_flagger::flagging::detector::{
    detect_flagged_candidates, get_flag_info_for_candidates, FlagReason,
};
use candidate_flagger::flagging::reporter::format_flag_reason;
use candidate_flagger::input::loader::RecordLoader;
use candidate_flagger::output::formatter::{JsonFormatter, OutputFormatter};
use candidate_flagger::output::report::FlagReport;
use std::path::Path;

fn load_fixture() -> Vec<candidate_flagger::CandidateRecord> {
    RecordLoader::load(Path::new("tests/fixtures/candidates.json")).unwrap()
}

#[test]
fn test_fixture_detection_end_to_end() {
    let records = load_fixture();
    let flagged = detect_flagged_candidates(&records);

    // Priya and P. Sharma share both a phone number and a LinkedIn profile
    assert_eq!(
        flagged[&1].reasons,
        vec![FlagReason::SameMobile, FlagReason::SameLinkedin]
    );
    assert_eq!(flagged[&1].flagged_with[&FlagReason::SameMobile], vec![2]);
    assert_eq!(flagged[&1].flagged_with[&FlagReason::SameLinkedin], vec![2]);
    assert_eq!(flagged[&2].flagged_with[&FlagReason::SameMobile], vec![1]);

    // Alice and Alicia share a GitHub profile behind scheme/www/slash/case noise
    assert_eq!(flagged[&3].reasons, vec![FlagReason::SameGithub]);
    assert_eq!(flagged[&3].flagged_with[&FlagReason::SameGithub], vec![4]);
    assert_eq!(flagged[&4].flagged_with[&FlagReason::SameGithub], vec![3]);

    // Everyone else is clean: unique contacts, missing contacts, junk phone
    for id in [5, 6, 7, 8] {
        assert!(!flagged.contains_key(&id), "candidate {} wrongly flagged", id);
    }
}

#[test]
fn test_inspect_equals_filtered_global_detection() {
    let records = load_fixture();
    let all = detect_flagged_candidates(&records);
    let subset = get_flag_info_for_candidates(&[1, 4, 6], &records);

    assert_eq!(subset.len(), 2);
    assert_eq!(subset[&1], all[&1]);
    assert_eq!(subset[&4], all[&4]);
    assert!(!subset.contains_key(&6));
}

#[test]
fn test_report_pipeline_produces_stable_json() {
    let records = load_fixture();
    let flags = detect_flagged_candidates(&records);
    let report = FlagReport::build(&records, &flags);

    assert_eq!(report.total_records, 8);
    assert_eq!(report.flagged_count, 4);
    let ids: Vec<i64> = report.candidates.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let json = JsonFormatter::new(true).format_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["candidates"][0]["id"], 1);
    assert_eq!(value["candidates"][0]["reasons"][0], "same_mobile");
    assert_eq!(value["candidates"][0]["reasons"][1], "same_linkedin");
    assert_eq!(
        value["candidates"][0]["summary"],
        "Same Mobile number & LinkedIn"
    );
}

#[test]
fn test_summary_text_matches_reason_set() {
    let records = load_fixture();
    let flagged = detect_flagged_candidates(&records);

    assert_eq!(
        format_flag_reason(&flagged[&1].reasons),
        "Same Mobile number & LinkedIn"
    );
    assert_eq!(format_flag_reason(&flagged[&3].reasons), "Same GitHub");
}

#[test]
fn test_nonexistent_records_file() {
    let result = RecordLoader::load(Path::new("tests/fixtures/missing.json"));
    assert!(result.is_err());
}

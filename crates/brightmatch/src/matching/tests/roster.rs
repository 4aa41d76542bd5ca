use crate::matching::domain::Intent;
use crate::matching::roster::{Roster, RosterImportError};

use super::common::code;

#[test]
fn parses_rows_with_optional_fields() {
    let csv = "\
id,iq_score,eq_score,mbti_type,intent
emma,128,82,INFJ,dating
alex, 135 ,68,entp,Friendship
fresh,,,,
";

    let roster = Roster::from_reader(csv.as_bytes()).expect("roster parses");
    assert_eq!(roster.entries().len(), 3);

    let alex = roster.find("alex").expect("alex present");
    assert_eq!(alex.fields.iq_score, 135);
    assert_eq!(alex.fields.mbti_type, Some(code("ENTP")));
    assert_eq!(alex.fields.intent, Some(Intent::Friendship));

    let fresh = roster.find("fresh").expect("fresh present");
    assert_eq!(fresh.fields.iq_score, 0);
    assert_eq!(fresh.fields.eq_score, 0);
    assert!(fresh.fields.mbti_type.is_none());
    assert!(fresh.fields.intent.is_none());

    assert!(roster.find("nobody").is_none());
}

#[test]
fn unknown_personality_code_reports_row() {
    let csv = "\
id,iq_score,eq_score,mbti_type,intent
emma,128,82,INFJ,dating
alex,135,68,XYZW,dating
";

    match Roster::from_reader(csv.as_bytes()) {
        Err(RosterImportError::InvalidRow { row, reason }) => {
            assert_eq!(row, 3);
            assert!(reason.contains("XYZW"), "{reason}");
        }
        other => panic!("expected invalid row error, got {other:?}"),
    }
}

#[test]
fn unknown_intent_is_rejected() {
    let csv = "id,iq_score,eq_score,mbti_type,intent\nemma,128,82,,networking\n";

    match Roster::from_reader(csv.as_bytes()) {
        Err(RosterImportError::InvalidRow { row: 2, .. }) => {}
        other => panic!("expected invalid row error, got {other:?}"),
    }
}

#[test]
fn negative_scores_are_rejected() {
    let csv = "id,iq_score,eq_score,mbti_type,intent\nemma,-5,82,,\n";

    match Roster::from_reader(csv.as_bytes()) {
        Err(RosterImportError::InvalidRow { reason, .. }) => {
            assert!(reason.contains("negative"));
        }
        other => panic!("expected invalid row error, got {other:?}"),
    }
}

#[test]
fn non_numeric_score_surfaces_csv_error() {
    let csv = "id,iq_score,eq_score,mbti_type,intent\nemma,high,82,,\n";

    match Roster::from_reader(csv.as_bytes()) {
        Err(RosterImportError::Csv(_)) => {}
        other => panic!("expected csv error, got {other:?}"),
    }
}

#[test]
fn missing_file_surfaces_io_error() {
    match Roster::from_path("/nonexistent/brightmatch/roster.csv") {
        Err(RosterImportError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

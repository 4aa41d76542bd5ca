use crate::assessments::PersonalityCode;
use crate::matching::domain::{Intent, ScoreFields};
use crate::matching::roster::RosterEntry;

pub(super) fn code(value: &str) -> PersonalityCode {
    value.parse().expect("valid personality code")
}

pub(super) fn profile(
    iq_score: i32,
    eq_score: i32,
    mbti_type: Option<&str>,
    intent: Option<Intent>,
) -> ScoreFields {
    ScoreFields {
        iq_score,
        eq_score,
        mbti_type: mbti_type.map(code),
        intent,
    }
}

pub(super) fn empty_profile() -> ScoreFields {
    ScoreFields::default()
}

pub(super) fn roster_entry(id: &str, iq_score: i32, eq_score: i32) -> RosterEntry {
    RosterEntry {
        id: id.to_string(),
        fields: profile(iq_score, eq_score, None, None),
    }
}

/// Sample members seeded in the demo data set.
pub(super) fn sample_roster() -> Vec<RosterEntry> {
    vec![
        roster_entry("emma", 128, 82),
        roster_entry("alex", 135, 68),
        roster_entry("sophia", 122, 91),
        roster_entry("marcus", 141, 76),
    ]
}

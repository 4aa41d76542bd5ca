use super::common::*;
use crate::matching::leaderboard::{rank, LeaderboardOrder, DEFAULT_LEADERBOARD_LIMIT};
use crate::matching::roster::Roster;

fn ids(entries: &[crate::matching::LeaderboardEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.id.as_str()).collect()
}

#[test]
fn members_missing_either_assessment_are_excluded() {
    let mut roster = sample_roster();
    roster.push(roster_entry("no-eq", 150, 0));
    roster.push(roster_entry("no-iq", 0, 99));
    roster.push(roster_entry("fresh", 0, 0));

    let board = rank(&roster, LeaderboardOrder::Total, DEFAULT_LEADERBOARD_LIMIT);

    assert_eq!(board.len(), 4);
    assert!(board
        .iter()
        .all(|entry| entry.iq_score > 0 && entry.eq_score > 0));
}

#[test]
fn orders_by_requested_key_highest_first() {
    let roster = sample_roster();

    let by_iq = rank(&roster, LeaderboardOrder::Iq, 10);
    assert_eq!(ids(&by_iq), vec!["marcus", "alex", "emma", "sophia"]);

    let by_eq = rank(&roster, LeaderboardOrder::Eq, 10);
    assert_eq!(ids(&by_eq), vec!["sophia", "emma", "marcus", "alex"]);

    let by_total = rank(&roster, LeaderboardOrder::Total, 10);
    assert_eq!(ids(&by_total), vec!["marcus", "sophia", "emma", "alex"]);
    assert_eq!(by_total[0].total_score, 217);
    assert_eq!(
        by_total.iter().map(|entry| entry.rank).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn ties_keep_roster_order() {
    let roster = vec![
        roster_entry("first", 120, 80),
        roster_entry("second", 110, 90),
        roster_entry("third", 125, 75),
    ];

    let board = rank(&roster, LeaderboardOrder::Total, 10);
    assert_eq!(ids(&board), vec!["first", "second", "third"]);
}

#[test]
fn limit_truncates_after_sorting() {
    let roster = sample_roster();

    let board = rank(&roster, LeaderboardOrder::Iq, 2);
    assert_eq!(ids(&board), vec!["marcus", "alex"]);

    assert!(rank(&roster, LeaderboardOrder::Iq, 0).is_empty());
}

#[test]
fn default_order_is_total() {
    assert_eq!(LeaderboardOrder::default(), LeaderboardOrder::Total);
}

#[test]
fn totals_past_i32_range_rank_correctly() {
    let roster = vec![
        roster_entry("steady", 130, 90),
        roster_entry("huge", 2_000_000_000, 2_000_000_000),
        roster_entry("max", i32::MAX, 1),
    ];

    let board = rank(&roster, LeaderboardOrder::Total, 10);

    assert_eq!(ids(&board), vec!["huge", "max", "steady"]);
    assert_eq!(board[0].total_score, 4_000_000_000);
    assert_eq!(board[1].total_score, i64::from(i32::MAX) + 1);
}

#[test]
fn imported_extreme_scores_rank_without_overflow() {
    let csv = "id,iq_score,eq_score,mbti_type,intent\na,2000000000,2000000000,,\nb,120,80,,\n";
    let roster = Roster::from_reader(csv.as_bytes()).expect("roster parses");

    let board = rank(roster.entries(), LeaderboardOrder::Total, 10);

    assert_eq!(ids(&board), vec!["a", "b"]);
    assert_eq!(board[0].total_score, 4_000_000_000);
}

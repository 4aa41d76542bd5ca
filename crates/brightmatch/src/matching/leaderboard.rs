use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::roster::RosterEntry;

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// Key a leaderboard is sorted by, highest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardOrder {
    Iq,
    Eq,
    #[default]
    Total,
}

impl LeaderboardOrder {
    fn key(self, entry: &RosterEntry) -> i64 {
        match self {
            LeaderboardOrder::Iq => i64::from(entry.fields.iq_score),
            LeaderboardOrder::Eq => i64::from(entry.fields.eq_score),
            LeaderboardOrder::Total => total_score(entry),
        }
    }
}

/// Widened so any pair of `i32` scores sums without overflow.
fn total_score(entry: &RosterEntry) -> i64 {
    i64::from(entry.fields.iq_score) + i64::from(entry.fields.eq_score)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: String,
    pub iq_score: i32,
    pub eq_score: i32,
    pub total_score: i64,
}

/// Rank members who have completed both assessments. Equal keys keep their
/// roster order.
pub fn rank(
    entries: &[RosterEntry],
    order: LeaderboardOrder,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    let mut eligible: Vec<&RosterEntry> = entries
        .iter()
        .filter(|entry| entry.fields.assessments_complete())
        .collect();
    eligible.sort_by_key(|entry| Reverse(order.key(entry)));

    eligible
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(position, entry)| LeaderboardEntry {
            rank: position + 1,
            id: entry.id.clone(),
            iq_score: entry.fields.iq_score,
            eq_score: entry.fields.eq_score,
            total_score: total_score(entry),
        })
        .collect()
}

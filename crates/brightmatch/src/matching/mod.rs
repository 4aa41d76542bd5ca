//! Pairwise compatibility, type affinity, and leaderboard ranking over
//! persisted profile score fields.

pub mod affinity;
pub mod domain;
pub mod engine;
pub mod leaderboard;
pub mod roster;

#[cfg(test)]
mod tests;

pub use affinity::{type_affinity, DEFAULT_AFFINITY};
pub use domain::{Intent, ParseIntentError, ScoreFields};
pub use engine::{
    compatibility, CompatibilityEngine, CompatibilityReport, CompatibilityWeights, FactorScore,
    MatchFactor, MAX_COMPATIBILITY, MIN_COMPATIBILITY, NEUTRAL_COMPATIBILITY,
};
pub use leaderboard::{rank, LeaderboardEntry, LeaderboardOrder, DEFAULT_LEADERBOARD_LIMIT};
pub use roster::{Roster, RosterEntry, RosterImportError};

mod factors;
mod weights;

pub use weights::CompatibilityWeights;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::ScoreFields;
use factors::collect_factors;

/// Lowest percentage ever shown for a pairing.
pub const MIN_COMPATIBILITY: u8 = 10;
/// Highest percentage ever shown for a pairing.
pub const MAX_COMPATIBILITY: u8 = 99;
/// Returned when the two profiles share no comparable field.
pub const NEUTRAL_COMPATIBILITY: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    IqProximity,
    EqProximity,
    TypeAffinity,
    IntentAlignment,
}

/// One applied factor, kept so a displayed percentage can be explained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor: MatchFactor,
    pub score: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub score: u8,
    pub factors: Vec<FactorScore>,
}

impl CompatibilityReport {
    pub fn factor(&self, factor: MatchFactor) -> Option<&FactorScore> {
        self.factors.iter().find(|entry| entry.factor == factor)
    }
}

/// Stateless scorer applying one weight split to any pair of profiles.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEngine {
    weights: CompatibilityWeights,
}

impl CompatibilityEngine {
    pub fn new(weights: CompatibilityWeights) -> Self {
        Self {
            weights: weights.sanitized(),
        }
    }

    pub fn weights(&self) -> &CompatibilityWeights {
        &self.weights
    }

    pub fn evaluate(&self, a: &ScoreFields, b: &ScoreFields) -> CompatibilityReport {
        let factors = collect_factors(a, b, &self.weights);
        let weight_sum: f64 = factors.iter().map(|entry| entry.weight).sum();

        let weighted: f64 = factors.iter().map(|entry| entry.score * entry.weight).sum();
        let average = weighted / weight_sum;

        // Covers an empty or zero-weight factor list as well as overflow.
        let score = if weight_sum > 0.0 && average.is_finite() {
            average.round().clamp(
                f64::from(MIN_COMPATIBILITY),
                f64::from(MAX_COMPATIBILITY),
            ) as u8
        } else {
            NEUTRAL_COMPATIBILITY
        };

        debug!(
            score,
            applied = factors.len(),
            weight_sum,
            "compatibility evaluated"
        );

        CompatibilityReport { score, factors }
    }

    pub fn score(&self, a: &ScoreFields, b: &ScoreFields) -> u8 {
        self.evaluate(a, b).score
    }
}

/// Compatibility percentage under the canonical weights.
pub fn compatibility(a: &ScoreFields, b: &ScoreFields) -> u8 {
    CompatibilityEngine::default().score(a, b)
}

use super::super::affinity::type_affinity;
use super::super::domain::ScoreFields;
use super::weights::CompatibilityWeights;
use super::{FactorScore, MatchFactor};

/// Affinity awarded when both members want the same thing.
pub(crate) const INTENT_MATCH: f64 = 100.0;
/// Affinity awarded when intents differ.
pub(crate) const INTENT_MISMATCH: f64 = 30.0;

/// 100 for identical scores, losing a point per two points of difference.
pub(crate) fn proximity(a: i32, b: i32) -> f64 {
    let diff = (a as f64 - b as f64).abs();
    (100.0 - diff / 2.0).max(0.0)
}

pub(crate) fn collect_factors(
    a: &ScoreFields,
    b: &ScoreFields,
    weights: &CompatibilityWeights,
) -> Vec<FactorScore> {
    let mut factors = Vec::with_capacity(4);

    if a.has_iq() && b.has_iq() {
        factors.push(FactorScore {
            factor: MatchFactor::IqProximity,
            score: proximity(a.iq_score, b.iq_score),
            weight: weights.iq,
        });
    }

    if a.has_eq() && b.has_eq() {
        factors.push(FactorScore {
            factor: MatchFactor::EqProximity,
            score: proximity(a.eq_score, b.eq_score),
            weight: weights.eq,
        });
    }

    if let (Some(type_a), Some(type_b)) = (a.mbti_type, b.mbti_type) {
        factors.push(FactorScore {
            factor: MatchFactor::TypeAffinity,
            score: type_affinity(type_a, type_b) as f64,
            weight: weights.personality,
        });
    }

    if let (Some(intent_a), Some(intent_b)) = (a.intent, b.intent) {
        let score = if intent_a == intent_b {
            INTENT_MATCH
        } else {
            INTENT_MISMATCH
        };
        factors.push(FactorScore {
            factor: MatchFactor::IntentAlignment,
            score,
            weight: weights.intent,
        });
    }

    factors
}

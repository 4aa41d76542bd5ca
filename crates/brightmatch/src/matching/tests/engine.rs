use super::common::*;
use crate::assessments::PersonalityCode;
use crate::matching::domain::Intent;
use crate::matching::engine::{
    compatibility, CompatibilityEngine, CompatibilityWeights, MatchFactor,
    NEUTRAL_COMPATIBILITY,
};

#[test]
fn empty_profiles_score_neutral() {
    assert_eq!(
        compatibility(&empty_profile(), &empty_profile()),
        NEUTRAL_COMPATIBILITY
    );

    let report = CompatibilityEngine::default().evaluate(&empty_profile(), &empty_profile());
    assert!(report.factors.is_empty());
    assert_eq!(report.score, 50);
}

#[test]
fn one_sided_data_is_skipped_not_penalised() {
    let a = profile(130, 0, Some("INTJ"), Some(Intent::Dating));
    let b = profile(0, 75, None, None);

    assert_eq!(compatibility(&a, &b), NEUTRAL_COMPATIBILITY);
}

#[test]
fn scores_and_shared_intent_renormalise_over_applied_weights() {
    let a = profile(128, 82, None, Some(Intent::Dating));
    let b = profile(135, 68, None, Some(Intent::Dating));

    let report = CompatibilityEngine::default().evaluate(&a, &b);

    assert_eq!(report.score, 96);
    assert_eq!(report.factors.len(), 3);
    let iq = report.factor(MatchFactor::IqProximity).expect("iq applied");
    assert!((iq.score - 96.5).abs() < 1e-9);
    let eq = report.factor(MatchFactor::EqProximity).expect("eq applied");
    assert!((eq.score - 93.0).abs() < 1e-9);
    assert!(report.factor(MatchFactor::TypeAffinity).is_none());
}

#[test]
fn mismatched_intent_alone_scores_thirty() {
    let a = profile(0, 0, None, Some(Intent::Dating));
    let b = profile(0, 0, None, Some(Intent::Friendship));

    assert_eq!(compatibility(&a, &b), 30);
}

#[test]
fn type_affinity_uses_matrix_with_reverse_lookup() {
    let a = profile(0, 0, Some("INTJ"), None);
    let b = profile(0, 0, Some("ENFP"), None);
    assert_eq!(compatibility(&a, &b), 95);
    assert_eq!(compatibility(&b, &a), 95);

    // Only the ESTJ row lists ENFP.
    let a = profile(0, 0, Some("ENFP"), None);
    let b = profile(0, 0, Some("ESTJ"), None);
    assert_eq!(compatibility(&a, &b), 70);
    assert_eq!(compatibility(&b, &a), 70);

    let a = profile(0, 0, Some("ISTJ"), None);
    let b = profile(0, 0, Some("INTJ"), None);
    assert_eq!(compatibility(&a, &b), 60);
}

#[test]
fn distant_scores_clamp_to_floor() {
    // IQ and EQ proximity both bottom out at 0; mismatched intent adds 30 * 0.2.
    let a = profile(300, 300, None, Some(Intent::Dating));
    let b = profile(70, 15, None, Some(Intent::Friendship));

    let report = CompatibilityEngine::default().evaluate(&a, &b);
    assert_eq!(report.factor(MatchFactor::IqProximity).map(|f| f.score), Some(0.0));
    assert_eq!(report.score, 10);
}

#[test]
fn identical_complete_profiles_never_reach_one_hundred() {
    let a = profile(120, 80, Some("INTJ"), Some(Intent::Dating));
    let b = profile(120, 80, Some("ENFP"), Some(Intent::Dating));

    // (100 * .25 + 100 * .25 + 95 * .30 + 100 * .20) / 1.0 = 98.5 -> 99
    assert_eq!(compatibility(&a, &b), 99);
}

#[test]
fn compatibility_is_symmetric_and_bounded() {
    let codes = ["INTJ", "ENFP", "ISTJ", "ESFP", "INFJ", "ESTP"];
    let intents = [None, Some(Intent::Dating), Some(Intent::Friendship)];
    let mut profiles = Vec::new();
    for (index, code) in codes.iter().enumerate() {
        for intent in intents {
            profiles.push(profile(
                70 + (index as i32) * 17,
                15 + (index as i32) * 13,
                Some(code),
                intent,
            ));
            profiles.push(profile(0, 40 + index as i32, None, intent));
        }
    }

    for a in &profiles {
        for b in &profiles {
            let forward = compatibility(a, b);
            assert!((10..=99).contains(&forward));
            assert_eq!(forward, compatibility(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn every_type_pair_yields_a_bounded_score() {
    for a in PersonalityCode::ALL {
        for b in PersonalityCode::ALL {
            let left = profile(110, 60, Some(a.as_str()), None);
            let right = profile(110, 60, Some(b.as_str()), None);
            let value = compatibility(&left, &right);
            assert!((10..=99).contains(&value), "{a} vs {b} gave {value}");
        }
    }
}

#[test]
fn custom_weights_shift_the_balance() {
    // Intent-forward split: intent 0.30, type 0.20.
    let engine = CompatibilityEngine::new(CompatibilityWeights {
        iq: 0.25,
        eq: 0.25,
        personality: 0.20,
        intent: 0.30,
    });
    let a = profile(0, 0, Some("ISTJ"), Some(Intent::Dating));
    let b = profile(0, 0, Some("INTJ"), Some(Intent::Friendship));

    // (60 * .2 + 30 * .3) / .5 = 42
    assert_eq!(engine.score(&a, &b), 42);
    // (60 * .3 + 30 * .2) / .5 = 48
    assert_eq!(compatibility(&a, &b), 48);
}

#[test]
fn zeroed_weights_fall_back_to_neutral() {
    let engine = CompatibilityEngine::new(CompatibilityWeights {
        iq: 0.0,
        eq: 0.0,
        personality: 0.0,
        intent: 0.0,
    });
    let a = profile(100, 50, None, Some(Intent::Dating));

    assert_eq!(engine.score(&a, &a), NEUTRAL_COMPATIBILITY);
}

#[test]
fn oversized_weights_stay_within_bounds() {
    let a = profile(120, 80, None, None);
    let b = profile(110, 60, None, None);

    let overflowing = CompatibilityEngine::new(CompatibilityWeights {
        iq: 1e308,
        eq: 1e308,
        personality: 0.3,
        intent: 0.2,
    });
    assert_eq!(overflowing.weights(), &CompatibilityWeights::CANONICAL);
    assert_eq!(overflowing.score(&a, &a), 99);

    // Weight total is finite but the weighted sum is not.
    let lopsided = CompatibilityEngine::new(CompatibilityWeights {
        iq: 1e307,
        eq: 1e307,
        personality: 0.3,
        intent: 0.2,
    });
    for (left, right) in [(&a, &a), (&a, &b)] {
        let value = lopsided.score(left, right);
        assert!((10..=99).contains(&value), "score {value} out of bounds");
    }
}

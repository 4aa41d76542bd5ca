use crate::assessments::PersonalityCode;

/// Affinity used when neither direction of a pairing is tabulated.
pub const DEFAULT_AFFINITY: u8 = 60;

/// Tuned pairings per type, strongest first. Rows are not symmetric: a pair
/// may be listed from one side only, or with different values per side.
#[rustfmt::skip]
const TYPE_COMPATIBILITY: [(&str, [(&str, u8); 6]); 16] = [
    ("INTJ", [("ENFP", 95), ("ENTP", 90), ("INFJ", 85), ("INFP", 80), ("ENTJ", 75), ("INTP", 70)]),
    ("INTP", [("ENFJ", 95), ("ENTJ", 90), ("INFJ", 85), ("ENFP", 80), ("INTJ", 75), ("ENTP", 70)]),
    ("ENTJ", [("INFP", 95), ("INTP", 90), ("ENFP", 85), ("INTJ", 80), ("ENFJ", 75), ("ENTP", 70)]),
    ("ENTP", [("INFJ", 95), ("INTJ", 90), ("ENFJ", 85), ("ISFJ", 80), ("INTP", 75), ("ENFP", 70)]),
    ("INFJ", [("ENTP", 95), ("ENFP", 90), ("INTJ", 85), ("INTP", 80), ("ENFJ", 75), ("INFP", 70)]),
    ("INFP", [("ENTJ", 95), ("ENFJ", 90), ("INTJ", 85), ("ENTP", 80), ("INFJ", 75), ("ISFJ", 70)]),
    ("ENFJ", [("INTP", 95), ("INFP", 90), ("ENTP", 85), ("INTJ", 80), ("INFJ", 75), ("ENFP", 70)]),
    ("ENFP", [("INTJ", 95), ("INFJ", 90), ("ENTJ", 85), ("INTP", 80), ("ENFJ", 75), ("ENTP", 70)]),
    ("ISTJ", [("ESFP", 85), ("ESTP", 80), ("ISFP", 75), ("ENFP", 70), ("ESTJ", 65), ("ISFJ", 60)]),
    ("ISFJ", [("ESTP", 85), ("ESFP", 80), ("ENTP", 75), ("ENFP", 70), ("INFP", 65), ("ISTJ", 60)]),
    ("ESTJ", [("ISFP", 85), ("ISTP", 80), ("INFP", 75), ("ENFP", 70), ("ISTJ", 65), ("ESFJ", 60)]),
    ("ESFJ", [("ISTP", 85), ("ISFP", 80), ("INFP", 75), ("INTP", 70), ("ISFJ", 65), ("ESTJ", 60)]),
    ("ISTP", [("ESFJ", 85), ("ESTJ", 80), ("ENFJ", 75), ("ESFP", 70), ("ISFP", 65), ("ESTP", 60)]),
    ("ISFP", [("ESTJ", 85), ("ESFJ", 80), ("ENFJ", 75), ("ENTJ", 70), ("ISTP", 65), ("ESFP", 60)]),
    ("ESTP", [("ISFJ", 85), ("ISTJ", 80), ("INFJ", 75), ("ISFP", 70), ("ESFP", 65), ("ISTP", 60)]),
    ("ESFP", [("ISTJ", 85), ("ISFJ", 80), ("INTJ", 75), ("ISTP", 70), ("ESTP", 65), ("ISFP", 60)]),
];

fn tabulated(from: PersonalityCode, to: PersonalityCode) -> Option<u8> {
    TYPE_COMPATIBILITY
        .iter()
        .find(|(code, _)| *code == from.as_str())
        .and_then(|(_, row)| row.iter().find(|(partner, _)| *partner == to.as_str()))
        .map(|(_, affinity)| *affinity)
}

/// Affinity of `a` toward `b`: the `a` row first, then the `b` row, then the
/// neutral default.
pub fn type_affinity(a: PersonalityCode, b: PersonalityCode) -> u8 {
    tabulated(a, b)
        .or_else(|| tabulated(b, a))
        .unwrap_or(DEFAULT_AFFINITY)
}

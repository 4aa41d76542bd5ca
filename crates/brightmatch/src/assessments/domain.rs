use serde::{Deserialize, Serialize};

use super::personality::Dichotomy;

/// Index of the option a respondent picked. Signed so that malformed client
/// payloads reach validation instead of failing deserialization.
pub type AnswerIndex = i32;

/// Which calibrated assessment a score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreKind {
    Iq,
    Eq,
}

impl ScoreKind {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreKind::Iq => "iq",
            ScoreKind::Eq => "eq",
        }
    }
}

/// Single catalog entry. IQ items carry `correct_answer_index`, personality
/// items carry `dimension`, EQ items carry neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dichotomy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer_index: Option<usize>,
}

impl Question {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// Display result for a calibrated assessment. Only `score` is persisted on
/// the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub score: i32,
    pub percentile: u8,
    pub description: String,
}

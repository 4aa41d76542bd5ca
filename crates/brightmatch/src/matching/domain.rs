use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assessments::PersonalityCode;

/// What a member is on the app for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Dating,
    Friendship,
}

impl Intent {
    pub const fn label(self) -> &'static str {
        match self {
            Intent::Dating => "dating",
            Intent::Friendship => "friendship",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a supported intent (expected dating or friendship)")]
pub struct ParseIntentError(pub String);

impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dating" => Ok(Intent::Dating),
            "friendship" => Ok(Intent::Friendship),
            _ => Err(ParseIntentError(value.to_string())),
        }
    }
}

/// Persisted profile fields the compatibility engine reads. A score of 0
/// means the assessment has not been taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFields {
    #[serde(default)]
    pub iq_score: i32,
    #[serde(default)]
    pub eq_score: i32,
    #[serde(default)]
    pub mbti_type: Option<PersonalityCode>,
    #[serde(default)]
    pub intent: Option<Intent>,
}

impl ScoreFields {
    pub fn has_iq(&self) -> bool {
        self.iq_score > 0
    }

    pub fn has_eq(&self) -> bool {
        self.eq_score > 0
    }

    /// Both calibrated assessments are on file.
    pub fn assessments_complete(&self) -> bool {
        self.has_iq() && self.has_eq()
    }
}

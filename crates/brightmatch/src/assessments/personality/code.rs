use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four independently tallied personality axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dichotomy {
    #[serde(rename = "EI")]
    ExtraversionIntroversion,
    #[serde(rename = "SN")]
    SensingIntuition,
    #[serde(rename = "TF")]
    ThinkingFeeling,
    #[serde(rename = "JP")]
    JudgingPerceiving,
}

impl Dichotomy {
    /// Axes in the order their letters appear in a code.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ExtraversionIntroversion,
            Self::SensingIntuition,
            Self::ThinkingFeeling,
            Self::JudgingPerceiving,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::ExtraversionIntroversion => "EI",
            Self::SensingIntuition => "SN",
            Self::ThinkingFeeling => "TF",
            Self::JudgingPerceiving => "JP",
        }
    }

    pub const fn letters(self) -> (char, char) {
        match self {
            Self::ExtraversionIntroversion => ('E', 'I'),
            Self::SensingIntuition => ('S', 'N'),
            Self::ThinkingFeeling => ('T', 'F'),
            Self::JudgingPerceiving => ('J', 'P'),
        }
    }

    pub const fn position(self) -> usize {
        match self {
            Self::ExtraversionIntroversion => 0,
            Self::SensingIntuition => 1,
            Self::ThinkingFeeling => 2,
            Self::JudgingPerceiving => 3,
        }
    }

    const fn bit(self) -> u8 {
        1 << (3 - self.position())
    }
}

/// Which side of a dichotomy a respondent leans toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pole {
    First,
    Second,
}

const CODES: [&str; 16] = [
    "ESTJ", "ESTP", "ESFJ", "ESFP", "ENTJ", "ENTP", "ENFJ", "ENFP", "ISTJ", "ISTP", "ISFJ",
    "ISFP", "INTJ", "INTP", "INFJ", "INFP",
];

/// Four-letter personality type. Each bit marks the second letter of an axis,
/// E/I in the high bit down to J/P in the low bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalityCode(u8);

impl PersonalityCode {
    pub const ALL: [PersonalityCode; 16] = {
        let mut all = [PersonalityCode(0); 16];
        let mut index = 0;
        while index < 16 {
            all[index] = PersonalityCode(index as u8);
            index += 1;
        }
        all
    };

    pub fn from_poles(poles: [Pole; 4]) -> Self {
        let bits = Dichotomy::ordered()
            .into_iter()
            .zip(poles)
            .filter(|(_, pole)| *pole == Pole::Second)
            .fold(0u8, |bits, (axis, _)| bits | axis.bit());
        Self(bits)
    }

    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }

    pub fn pole(self, axis: Dichotomy) -> Pole {
        if self.0 & axis.bit() == 0 {
            Pole::First
        } else {
            Pole::Second
        }
    }

    pub fn letter(self, axis: Dichotomy) -> char {
        let (first, second) = axis.letters();
        match self.pole(axis) {
            Pole::First => first,
            Pole::Second => second,
        }
    }

    pub fn as_str(self) -> &'static str {
        CODES[self.index()]
    }
}

impl fmt::Display for PersonalityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored type string is not one of the sixteen codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a four-letter personality code")]
pub struct ParseCodeError(pub String);

impl FromStr for PersonalityCode {
    type Err = ParseCodeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        CODES
            .iter()
            .position(|code| *code == normalized)
            .map(|index| Self(index as u8))
            .ok_or_else(|| ParseCodeError(value.to_string()))
    }
}

impl TryFrom<String> for PersonalityCode {
    type Error = ParseCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonalityCode> for String {
    fn from(code: PersonalityCode) -> Self {
        code.as_str().to_string()
    }
}

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Intent, ScoreFields};
use crate::assessments::PersonalityCode;

/// Member identifier paired with the persisted fields compatibility reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub fields: ScoreFields,
}

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidRow { row: usize, reason: String },
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::InvalidRow { row, reason } => {
                write!(f, "roster row {} rejected: {}", row, reason)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::InvalidRow { .. } => None,
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    #[serde(default)]
    iq_score: Option<i32>,
    #[serde(default)]
    eq_score: Option<i32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    mbti_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    intent: Option<String>,
}

impl RosterRow {
    fn into_entry(self, row: usize) -> Result<RosterEntry, RosterImportError> {
        let invalid = |reason: String| RosterImportError::InvalidRow { row, reason };

        let mbti_type = self
            .mbti_type
            .map(|value| value.parse::<PersonalityCode>())
            .transpose()
            .map_err(|err| invalid(err.to_string()))?;
        let intent = self
            .intent
            .map(|value| value.parse::<Intent>())
            .transpose()
            .map_err(|err| invalid(err.to_string()))?;

        let iq_score = self.iq_score.unwrap_or(0);
        let eq_score = self.eq_score.unwrap_or(0);
        if iq_score < 0 || eq_score < 0 {
            return Err(invalid("scores must not be negative".to_string()));
        }

        Ok(RosterEntry {
            id: self.id,
            fields: ScoreFields {
                iq_score,
                eq_score,
                mbti_type,
                intent,
            },
        })
    }
}

/// CSV export of member score fields, header
/// `id,iq_score,eq_score,mbti_type,intent`.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = Vec::new();

        for (index, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
            // Header is line 1.
            entries.push(record?.into_entry(index + 2)?);
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

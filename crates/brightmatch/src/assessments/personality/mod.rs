mod archetypes;
mod code;

pub use archetypes::{archetype, Archetype};
pub use code::{Dichotomy, ParseCodeError, PersonalityCode, Pole};

use serde::{Deserialize, Serialize};

use super::domain::{AnswerIndex, Question};
use super::validation::{check_answers, AnswerError};

/// Tally for a single axis. Option 0 counts toward the first letter, every
/// other option toward the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTally {
    pub dichotomy: Dichotomy,
    pub first: u32,
    pub second: u32,
}

impl AxisTally {
    fn empty(dichotomy: Dichotomy) -> Self {
        Self {
            dichotomy,
            first: 0,
            second: 0,
        }
    }

    /// Ties resolve to the first letter of the pair (E, S, T, J).
    pub fn preferred(&self) -> Pole {
        if self.second > self.first {
            Pole::Second
        } else {
            Pole::First
        }
    }

    /// Share of answers favouring the first letter, rounded to a percentage.
    /// An axis without answers reports an even split.
    pub fn first_percentage(&self) -> u8 {
        let total = self.first + self.second;
        if total == 0 {
            return 50;
        }
        ((self.first as f64 / total as f64) * 100.0).round() as u8
    }
}

/// Classification together with the tallies that produced it, used by the
/// personality chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    pub code: PersonalityCode,
    pub axes: [AxisTally; 4],
}

impl TypeBreakdown {
    pub fn axis(&self, dichotomy: Dichotomy) -> &AxisTally {
        &self.axes[dichotomy.position()]
    }
}

/// Tally a complete questionnaire and report every axis.
pub fn breakdown(
    answers: &[AnswerIndex],
    questions: &[Question],
) -> Result<TypeBreakdown, AnswerError> {
    check_answers(answers, questions)?;

    let mut axes = Dichotomy::ordered().map(AxisTally::empty);
    for (answer, question) in answers.iter().zip(questions) {
        let dichotomy = question
            .dimension
            .ok_or_else(|| AnswerError::MissingDimension {
                question_id: question.id.clone(),
            })?;

        let tally = &mut axes[dichotomy.position()];
        if *answer == 0 {
            tally.first += 1;
        } else {
            tally.second += 1;
        }
    }

    let code = PersonalityCode::from_poles(axes.map(|tally| tally.preferred()));
    Ok(TypeBreakdown { code, axes })
}

/// Classify a complete questionnaire into one of the sixteen codes.
pub fn classify_type(
    answers: &[AnswerIndex],
    questions: &[Question],
) -> Result<PersonalityCode, AnswerError> {
    breakdown(answers, questions).map(|breakdown| breakdown.code)
}

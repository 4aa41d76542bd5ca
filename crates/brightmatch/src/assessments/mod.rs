//! Assessment catalogs, answer validation, IQ/EQ calibration, and
//! personality typing.

pub mod catalog;
pub mod domain;
pub mod personality;
pub mod scoring;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::QuestionCatalog;
pub use domain::{AnswerIndex, Question, ScoreKind, TestResult};
pub use personality::{
    archetype, breakdown, classify_type, Archetype, AxisTally, Dichotomy, ParseCodeError,
    PersonalityCode, Pole, TypeBreakdown,
};
pub use scoring::{interpret_score, percentile_for, score, score_eq, score_iq};
pub use validation::{check_answers, validate_answers, AnswerError};

//! Scoring and compatibility core for BrightMatch.
//!
//! Assessments turn answer sequences into calibrated IQ/EQ results and
//! personality codes; matching combines the persisted fields of two profiles
//! into a display-only compatibility percentage.

pub mod assessments;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;

pub use assessments::{
    classify_type, interpret_score, score_eq, score_iq, validate_answers, AnswerError,
    PersonalityCode, Question, ScoreKind, TestResult,
};
pub use matching::{compatibility, Intent, ScoreFields};

mod bands;

use super::domain::{AnswerIndex, Question, ScoreKind, TestResult};
use super::validation::{check_answers, AnswerError};
use bands::{BandTable, ScoreCurve, EQ_BANDS, EQ_CURVE, IQ_BANDS, IQ_CURVE};

/// Highest per-question weight on the EQ scale (option index 3).
pub const EQ_MAX_OPTION_WEIGHT: u32 = 3;

/// Score an IQ submission from its share of correct answers.
pub fn score_iq(
    answers: &[AnswerIndex],
    questions: &[Question],
) -> Result<TestResult, AnswerError> {
    check_scorable(answers, questions)?;

    let correct = answers
        .iter()
        .zip(questions)
        .filter(|(answer, question)| {
            question
                .correct_answer_index
                .is_some_and(|correct| usize::try_from(**answer) == Ok(correct))
        })
        .count();
    let ratio = correct as f64 / questions.len() as f64;

    Ok(calibrate(&IQ_CURVE, &IQ_BANDS, ratio))
}

/// Score an EQ submission; each option is worth its own index in points.
pub fn score_eq(
    answers: &[AnswerIndex],
    questions: &[Question],
) -> Result<TestResult, AnswerError> {
    check_scorable(answers, questions)?;

    let total: u32 = answers.iter().map(|answer| answer.unsigned_abs()).sum();
    let max_possible = EQ_MAX_OPTION_WEIGHT * questions.len() as u32;
    let ratio = total as f64 / max_possible as f64;

    Ok(calibrate(&EQ_CURVE, &EQ_BANDS, ratio))
}

/// Dispatch to the scorer for `kind`.
pub fn score(
    kind: ScoreKind,
    answers: &[AnswerIndex],
    questions: &[Question],
) -> Result<TestResult, AnswerError> {
    match kind {
        ScoreKind::Iq => score_iq(answers, questions),
        ScoreKind::Eq => score_eq(answers, questions),
    }
}

/// Long-form paragraph shown under a persisted score.
pub fn interpret_score(score: i32, kind: ScoreKind) -> &'static str {
    bands_for(kind).band_for(score).interpretation
}

/// Percentile estimate for an already-calibrated score.
pub fn percentile_for(score: i32, kind: ScoreKind) -> u8 {
    bands_for(kind).band_for(score).percentile
}

fn bands_for(kind: ScoreKind) -> &'static BandTable {
    match kind {
        ScoreKind::Iq => &IQ_BANDS,
        ScoreKind::Eq => &EQ_BANDS,
    }
}

fn check_scorable(answers: &[AnswerIndex], questions: &[Question]) -> Result<(), AnswerError> {
    if questions.is_empty() {
        return Err(AnswerError::EmptyCatalog);
    }
    check_answers(answers, questions)
}

fn calibrate(curve: &ScoreCurve, bands: &'static BandTable, ratio: f64) -> TestResult {
    let score = curve.score(ratio);
    let band = bands.band_for(score);

    TestResult {
        score,
        percentile: band.percentile,
        description: band.description.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn iq_score_for_ratio(ratio: f64) -> i32 {
    IQ_CURVE.score(ratio)
}

#[cfg(test)]
pub(crate) fn eq_score_for_ratio(ratio: f64) -> i32 {
    EQ_CURVE.score(ratio)
}

#[cfg(test)]
pub(crate) fn iq_raw_for_ratio(ratio: f64) -> f64 {
    IQ_CURVE.raw(ratio)
}

#[cfg(test)]
pub(crate) fn eq_raw_for_ratio(ratio: f64) -> f64 {
    EQ_CURVE.raw(ratio)
}

use brightmatch::assessments::AnswerIndex;
use brightmatch::error::AppError;
use serde::Serialize;
use std::path::Path;

/// Answer files hold a JSON array of option indices.
pub(crate) fn read_answers(path: &Path) -> Result<Vec<AnswerIndex>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let answers = serde_json::from_str(&raw)?;
    Ok(answers)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

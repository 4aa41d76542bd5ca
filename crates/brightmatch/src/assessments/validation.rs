use super::domain::{AnswerIndex, Question};

/// Reasons an answer sequence cannot be scored against its catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("expected {expected} answers, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error(
        "answer {position} selects option {index}, but question `{question_id}` has {options} options"
    )]
    OutOfRange {
        position: usize,
        question_id: String,
        index: AnswerIndex,
        options: usize,
    },
    #[error("question catalog is empty")]
    EmptyCatalog,
    #[error("question `{question_id}` has no personality dimension")]
    MissingDimension { question_id: String },
}

/// Returns the first structural problem with `answers`, if any.
pub fn check_answers(answers: &[AnswerIndex], questions: &[Question]) -> Result<(), AnswerError> {
    if answers.len() != questions.len() {
        return Err(AnswerError::LengthMismatch {
            expected: questions.len(),
            found: answers.len(),
        });
    }

    for (position, (answer, question)) in answers.iter().zip(questions).enumerate() {
        let in_range = usize::try_from(*answer)
            .map(|index| index < question.option_count())
            .unwrap_or(false);
        if !in_range {
            return Err(AnswerError::OutOfRange {
                position,
                question_id: question.id.clone(),
                index: *answer,
                options: question.option_count(),
            });
        }
    }

    Ok(())
}

/// Submission gate used by the answer forms: same length as the catalog and
/// every index within its question's options.
pub fn validate_answers(answers: &[AnswerIndex], questions: &[Question]) -> bool {
    check_answers(answers, questions).is_ok()
}

use crate::assessments::domain::{AnswerIndex, Question};
use crate::assessments::personality::Dichotomy;
use crate::assessments::QuestionCatalog;

pub(super) fn iq_catalog() -> QuestionCatalog {
    QuestionCatalog::iq()
}

pub(super) fn eq_catalog() -> QuestionCatalog {
    QuestionCatalog::eq()
}

pub(super) fn personality_catalog() -> QuestionCatalog {
    QuestionCatalog::personality()
}

/// IQ answers with exactly `correct` keyed options chosen, the rest wrong.
pub(super) fn iq_answers_with_correct(correct: usize) -> Vec<AnswerIndex> {
    iq_catalog()
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| {
            let key = question.correct_answer_index.expect("iq items are keyed") as AnswerIndex;
            if position < correct {
                key
            } else {
                wrong_option(key)
            }
        })
        .collect()
}

pub(super) fn wrong_option(key: AnswerIndex) -> AnswerIndex {
    if key == 0 {
        1
    } else {
        0
    }
}

/// One answer per question, every question answered with the same option.
pub(super) fn uniform_answers(questions: &[Question], option: AnswerIndex) -> Vec<AnswerIndex> {
    vec![option; questions.len()]
}

/// Personality answers choosing the first letter on `first_count` items of
/// `target` and the first letter everywhere else.
pub(super) fn personality_answers(
    target: Dichotomy,
    first_count: usize,
) -> Vec<AnswerIndex> {
    let mut seen = 0;
    personality_catalog()
        .questions()
        .iter()
        .map(|question| {
            if question.dimension != Some(target) {
                return 0;
            }
            seen += 1;
            if seen <= first_count {
                0
            } else {
                1
            }
        })
        .collect()
}

pub(super) fn two_option_question(id: &str, dimension: Option<Dichotomy>) -> Question {
    Question {
        id: id.to_string(),
        text: format!("question {id}"),
        options: vec!["first".to_string(), "second".to_string()],
        dimension,
        correct_answer_index: None,
    }
}

use crate::infra::{print_json, read_answers};
use brightmatch::assessments::{
    archetype, breakdown, interpret_score, score, Dichotomy, Question, QuestionCatalog,
    ScoreKind,
};
use brightmatch::error::AppError;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AssessmentKind {
    Iq,
    Eq,
}

impl From<AssessmentKind> for ScoreKind {
    fn from(value: AssessmentKind) -> Self {
        match value {
            AssessmentKind::Iq => ScoreKind::Iq,
            AssessmentKind::Eq => ScoreKind::Eq,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CatalogKind {
    Iq,
    Eq,
    Personality,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Assessment the answers belong to
    #[arg(value_enum)]
    pub(crate) kind: AssessmentKind,
    /// JSON array of selected option indices, one per question
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// JSON array of selected option indices for the personality questionnaire
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Include per-axis tallies and percentages
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Catalog to print
    #[arg(value_enum)]
    pub(crate) catalog: CatalogKind,
}

#[derive(Serialize)]
struct ScoreOutput {
    kind: ScoreKind,
    score: i32,
    percentile: u8,
    description: String,
    interpretation: &'static str,
}

#[derive(Serialize)]
struct AxisOutput {
    dichotomy: Dichotomy,
    preferred: char,
    first: u32,
    second: u32,
    first_percentage: u8,
    second_percentage: u8,
}

#[derive(Serialize)]
struct ClassifyOutput {
    code: String,
    name: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    axes: Option<Vec<AxisOutput>>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let kind = ScoreKind::from(args.kind);
    let catalog = match kind {
        ScoreKind::Iq => QuestionCatalog::iq(),
        ScoreKind::Eq => QuestionCatalog::eq(),
    };
    let answers = read_answers(&args.answers)?;

    let result = score(kind, &answers, catalog.questions())?;
    info!(
        kind = kind.label(),
        score = result.score,
        percentile = result.percentile,
        "assessment scored"
    );

    print_json(&ScoreOutput {
        kind,
        score: result.score,
        percentile: result.percentile,
        description: result.description,
        interpretation: interpret_score(result.score, kind),
    })
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let catalog = QuestionCatalog::personality();
    let answers = read_answers(&args.answers)?;

    let result = breakdown(&answers, catalog.questions())?;
    let profile = archetype(result.code);
    info!(code = %result.code, "personality classified");

    let axes = args.breakdown.then(|| {
        result
            .axes
            .iter()
            .map(|tally| {
                let first_percentage = tally.first_percentage();
                AxisOutput {
                    dichotomy: tally.dichotomy,
                    preferred: result.code.letter(tally.dichotomy),
                    first: tally.first,
                    second: tally.second,
                    first_percentage,
                    second_percentage: 100 - first_percentage,
                }
            })
            .collect()
    });

    print_json(&ClassifyOutput {
        code: result.code.to_string(),
        name: profile.name,
        description: profile.description,
        axes,
    })
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = match args.catalog {
        CatalogKind::Iq => QuestionCatalog::iq(),
        CatalogKind::Eq => QuestionCatalog::eq(),
        CatalogKind::Personality => QuestionCatalog::personality(),
    };
    let questions: &[Question] = catalog.questions();
    info!(questions = questions.len(), "catalog listed");

    print_json(&questions)
}

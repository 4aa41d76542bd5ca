use crate::infra::print_json;
use brightmatch::config::MatchingConfig;
use brightmatch::error::AppError;
use brightmatch::matching::{
    rank, CompatibilityEngine, FactorScore, LeaderboardOrder, Roster, RosterEntry,
};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum OrderArg {
    Iq,
    Eq,
    #[default]
    Total,
}

impl From<OrderArg> for LeaderboardOrder {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Iq => LeaderboardOrder::Iq,
            OrderArg::Eq => LeaderboardOrder::Eq,
            OrderArg::Total => LeaderboardOrder::Total,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct CompatArgs {
    /// CSV roster with header id,iq_score,eq_score,mbti_type,intent
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Score a single pair and list the factors behind it
    #[arg(long, num_args = 2, value_names = ["ID_A", "ID_B"])]
    pub(crate) pair: Option<Vec<String>>,
}

#[derive(Args, Debug)]
pub(crate) struct LeaderboardArgs {
    /// CSV roster with header id,iq_score,eq_score,mbti_type,intent
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Ranking key, highest first
    #[arg(long, value_enum, default_value_t = OrderArg::Total)]
    pub(crate) order: OrderArg,
    /// Maximum entries to print (defaults to LEADERBOARD_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Serialize)]
struct PairOutput<'a> {
    a: &'a str,
    b: &'a str,
    score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    factors: Option<Vec<FactorScore>>,
}

pub(crate) fn run_compat(args: CompatArgs, config: &MatchingConfig) -> Result<(), AppError> {
    let roster = Roster::from_path(&args.roster)?;
    let engine = CompatibilityEngine::new(config.weights);

    if let Some([a, b]) = args.pair.as_deref() {
        let (a, b) = (lookup(&roster, a)?, lookup(&roster, b)?);
        let report = engine.evaluate(&a.fields, &b.fields);
        info!(a = %a.id, b = %b.id, score = report.score, "pair scored");

        return print_json(&PairOutput {
            a: &a.id,
            b: &b.id,
            score: report.score,
            factors: Some(report.factors),
        });
    }

    let entries = roster.entries();
    let mut pairs = Vec::new();
    for (index, a) in entries.iter().enumerate() {
        for b in &entries[index + 1..] {
            pairs.push(PairOutput {
                a: &a.id,
                b: &b.id,
                score: engine.score(&a.fields, &b.fields),
                factors: None,
            });
        }
    }
    pairs.sort_by(|left, right| right.score.cmp(&left.score));
    info!(members = entries.len(), pairs = pairs.len(), "roster scored");

    print_json(&pairs)
}

pub(crate) fn run_leaderboard(
    args: LeaderboardArgs,
    config: &MatchingConfig,
) -> Result<(), AppError> {
    let roster = Roster::from_path(&args.roster)?;
    let limit = args.limit.unwrap_or(config.leaderboard_limit);

    let board = rank(roster.entries(), args.order.into(), limit);
    info!(
        order = ?args.order,
        limit,
        ranked = board.len(),
        "leaderboard built"
    );

    print_json(&board)
}

fn lookup<'a>(roster: &'a Roster, id: &str) -> Result<&'a RosterEntry, AppError> {
    roster
        .find(id)
        .ok_or_else(|| AppError::UnknownMember(id.to_string()))
}

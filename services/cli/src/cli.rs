use crate::assessment::{
    run_catalog, run_classify, run_score, CatalogArgs, ClassifyArgs, ScoreArgs,
};
use crate::matching::{run_compat, run_leaderboard, CompatArgs, LeaderboardArgs};
use brightmatch::config::AppConfig;
use brightmatch::error::AppError;
use brightmatch::telemetry;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "brightmatch",
    about = "Score assessments and compare BrightMatch profiles from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score an IQ or EQ answer sheet against the built-in catalog
    Score(ScoreArgs),
    /// Classify a personality questionnaire into a four-letter code
    Classify(ClassifyArgs),
    /// Print a built-in question catalog
    Catalog(CatalogArgs),
    /// Compute compatibility between roster members
    Compat(CompatArgs),
    /// Rank roster members who completed both assessments
    Leaderboard(LeaderboardArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Classify(args) => run_classify(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Compat(args) => run_compat(args, &config.matching),
        Command::Leaderboard(args) => run_leaderboard(args, &config.matching),
    }
}

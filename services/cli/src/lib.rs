mod assessment;
mod cli;
mod infra;
mod matching;

use brightmatch::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

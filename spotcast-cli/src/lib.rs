//! Command-line interface for scoring weather samples against sport rules.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod classify;
mod error;
mod inputs;
mod rank;
mod score;

pub use error::CliError;

use classify::{ClassifyArgs, run_classify};
use rank::{RankArgs, run_rank};
use score::{ScoreArgs, run_score};

const ARG_SAMPLE: &str = "sample";
const ARG_RULES: &str = "rules";
const ARG_SPORT: &str = "sport";
const ENV_SCORE_SAMPLE: &str = "SPOTCAST_CMDS_SCORE_SAMPLE";
const ENV_SCORE_RULES: &str = "SPOTCAST_CMDS_SCORE_RULES";
const ENV_SCORE_SPORT: &str = "SPOTCAST_CMDS_SCORE_SPORT";
const ENV_RANK_SAMPLE: &str = "SPOTCAST_CMDS_RANK_SAMPLE";
const ENV_RANK_RULES: &str = "SPOTCAST_CMDS_RANK_RULES";
const ENV_CLASSIFY_SAMPLE: &str = "SPOTCAST_CMDS_CLASSIFY_SAMPLE";

/// Run the Spotcast CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Rank(args) => run_rank(args),
        Command::Classify(args) => run_classify(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "spotcast",
    about = "Score weather samples against configurable sport rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a weather sample for one sport.
    Score(ScoreArgs),
    /// Rank every active sport for a weather sample.
    Rank(RankArgs),
    /// Classify a weather sample with the aptitude heuristic.
    Classify(ClassifyArgs),
}

#[cfg(test)]
mod tests;

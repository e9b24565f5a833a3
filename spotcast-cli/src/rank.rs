//! Rank command implementation for the Spotcast CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use spotcast_scorer::rank;

use crate::inputs::{
    PolicyKind, SampleFormat, SelectedPolicy, load_catalogue, load_sample, require_existing,
    write_json,
};
use crate::{ARG_RULES, ARG_SAMPLE, CliError, ENV_RANK_RULES, ENV_RANK_SAMPLE};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score one weather sample for every active sport in an \
                 admin rule catalogue and print the sports best first. \
                 Sports that cannot be scored are listed separately with \
                 the reason.",
    about = "Rank every active sport for a weather sample"
)]
#[ortho_config(prefix = "SPOTCAST")]
pub(crate) struct RankArgs {
    /// Path to the weather sample JSON.
    #[arg(long = ARG_SAMPLE, value_name = "path")]
    #[serde(default)]
    pub(crate) sample: Option<Utf8PathBuf>,
    /// Path to the admin rule catalogue JSON.
    #[arg(long = ARG_RULES, value_name = "path")]
    #[serde(default)]
    pub(crate) rules: Option<Utf8PathBuf>,
    /// Layout of the sample file.
    #[arg(long, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) sample_format: Option<SampleFormat>,
    /// Compliance policy applied to each rule.
    #[arg(long, value_enum, value_name = "policy")]
    #[serde(default)]
    pub(crate) policy: Option<PolicyKind>,
    /// Distance outside a bound at which the linear ramp reaches zero.
    #[arg(long, value_name = "margin")]
    #[serde(default)]
    pub(crate) ramp_margin: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) sample: Utf8PathBuf,
    pub(crate) rules: Utf8PathBuf,
    pub(crate) sample_format: SampleFormat,
    pub(crate) policy: SelectedPolicy,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let sample = args.sample.ok_or(CliError::MissingArgument {
            field: ARG_SAMPLE,
            env: ENV_RANK_SAMPLE,
        })?;
        let rules = args.rules.ok_or(CliError::MissingArgument {
            field: ARG_RULES,
            env: ENV_RANK_RULES,
        })?;
        Ok(Self {
            sample,
            rules,
            sample_format: args.sample_format.unwrap_or_default(),
            policy: SelectedPolicy::resolve(args.policy, args.ramp_margin)?,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.sample, ARG_SAMPLE)?;
    require_existing(&config.rules, ARG_RULES)?;

    let sample = load_sample(&config.sample, config.sample_format)?;
    let catalogue = load_catalogue(&config.rules)?;
    let ranking = rank(&sample, &catalogue, &config.policy.scorer());
    info!(
        "ranked {} sports, {} unscored",
        ranking.ranked().len(),
        ranking.unranked().len()
    );
    write_json(writer, &ranking)
}

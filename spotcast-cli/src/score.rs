//! Score command implementation for the Spotcast CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use spotcast_core::{AptitudeSport, Score, SportId};
use spotcast_scorer::{Assessment, RuleContribution, Unscored};

use crate::inputs::{
    PolicyKind, SampleFormat, SelectedPolicy, load_catalogue, load_sample, require_existing,
    write_json,
};
use crate::{
    ARG_RULES, ARG_SAMPLE, ARG_SPORT, CliError, ENV_SCORE_RULES, ENV_SCORE_SAMPLE,
    ENV_SCORE_SPORT,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score one weather sample against one sport's rules from an \
                 admin rule catalogue. When the sport cannot be scored, \
                 --fallback rates the sample with the aptitude heuristic \
                 instead of failing.",
    about = "Score a weather sample for one sport"
)]
#[ortho_config(prefix = "SPOTCAST")]
pub(crate) struct ScoreArgs {
    /// Path to the weather sample JSON.
    #[arg(long = ARG_SAMPLE, value_name = "path")]
    #[serde(default)]
    pub(crate) sample: Option<Utf8PathBuf>,
    /// Path to the admin rule catalogue JSON.
    #[arg(long = ARG_RULES, value_name = "path")]
    #[serde(default)]
    pub(crate) rules: Option<Utf8PathBuf>,
    /// Id of the sport to score.
    #[arg(long = ARG_SPORT, value_name = "id")]
    #[serde(default)]
    pub(crate) sport: Option<String>,
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
    /// Heuristic (`surf` or `kite`) used when the sport cannot be scored.
    #[arg(long, value_name = "sport")]
    #[serde(default)]
    pub(crate) fallback: Option<String>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) sample: Utf8PathBuf,
    pub(crate) rules: Utf8PathBuf,
    pub(crate) sport: SportId,
    pub(crate) sample_format: SampleFormat,
    pub(crate) policy: SelectedPolicy,
    pub(crate) fallback: Option<AptitudeSport>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.sample, ARG_SAMPLE)?;
        require_existing(&self.rules, ARG_RULES)?;
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let sample = args.sample.ok_or(CliError::MissingArgument {
            field: ARG_SAMPLE,
            env: ENV_SCORE_SAMPLE,
        })?;
        let rules = args.rules.ok_or(CliError::MissingArgument {
            field: ARG_RULES,
            env: ENV_SCORE_RULES,
        })?;
        let sport = args.sport.ok_or(CliError::MissingArgument {
            field: ARG_SPORT,
            env: ENV_SCORE_SPORT,
        })?;
        let sport = SportId::new(sport).map_err(CliError::InvalidSport)?;
        let fallback = args
            .fallback
            .map(|name| name.parse::<AptitudeSport>())
            .transpose()
            .map_err(CliError::UnknownAptitudeSport)?;
        Ok(Self {
            sample,
            rules,
            sport,
            sample_format: args.sample_format.unwrap_or_default(),
            policy: SelectedPolicy::resolve(args.policy, args.ramp_margin)?,
            fallback,
        })
    }
}

/// JSON document printed by `score`.
#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) sport_id: SportId,
    pub(crate) assessment: Assessment,
    /// Weighted score rounded to two decimals, absent for heuristic results.
    pub(crate) score: Option<f64>,
    /// Per-rule contributions; empty unless the weighted scorer succeeded.
    pub(crate) contributions: Vec<RuleContribution>,
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &mut stdout)
}

pub(super) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let report = execute_score(&config)?;
    write_json(writer, &report)
}

fn execute_score(config: &ScoreConfig) -> Result<ScoreReport, CliError> {
    let sample = load_sample(&config.sample, config.sample_format)?;
    let catalogue = load_catalogue(&config.rules)?;
    let rules = catalogue.get(&config.sport);
    let scorer = config.policy.scorer();

    let outcome = rules.map(|rule_set| scorer.breakdown(&sample, rule_set));
    let (assessment, contributions) = match outcome {
        Some(Ok(breakdown)) => (Assessment::Scored(breakdown.score), breakdown.contributions),
        Some(Err(err)) => (
            Assessment::unscored(&sample, Unscored::Failed(err), config.fallback),
            Vec::new(),
        ),
        None => (
            Assessment::unscored(&sample, Unscored::NoRuleSet, config.fallback),
            Vec::new(),
        ),
    };
    let assessment = match assessment {
        Assessment::NoData { reason } => {
            return Err(CliError::Unscored {
                sport_id: config.sport.to_string(),
                reason,
            });
        }
        other => other,
    };
    Ok(ScoreReport {
        sport_id: config.sport.clone(),
        score: assessment.score().map(Score::rounded),
        assessment,
        contributions,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}

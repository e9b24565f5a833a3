//! Classify command implementation for the Spotcast CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use spotcast_core::{Aptitude, AptitudeSport};
use spotcast_scorer::classify_sample;

use crate::inputs::{SampleFormat, load_sample, require_existing, write_json};
use crate::{ARG_SAMPLE, CliError, ENV_CLASSIFY_SAMPLE};

/// Sports a spot offers when `--offers` is not given.
const ALL_APTITUDE_SPORTS: [AptitudeSport; 2] = [AptitudeSport::Surf, AptitudeSport::Kite];

/// CLI arguments for the `classify` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rate a weather sample as excelente, bueno or malo with the \
                 wind, wave and rain heuristic used for map markers. No rule \
                 catalogue is needed.",
    about = "Classify a weather sample with the aptitude heuristic"
)]
#[ortho_config(prefix = "SPOTCAST")]
pub(crate) struct ClassifyArgs {
    /// Path to the weather sample JSON.
    #[arg(long = ARG_SAMPLE, value_name = "path")]
    #[serde(default)]
    pub(crate) sample: Option<Utf8PathBuf>,
    /// Sport the user selected (`surf` or `kite`).
    #[arg(long, value_name = "sport")]
    #[serde(default)]
    pub(crate) sport: Option<String>,
    /// Comma-separated sports the spot offers, in preference order.
    #[arg(long, value_name = "sports")]
    #[serde(default)]
    pub(crate) offers: Option<String>,
    /// Layout of the sample file.
    #[arg(long, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) sample_format: Option<SampleFormat>,
}

impl ClassifyArgs {
    pub(crate) fn into_config(self) -> Result<ClassifyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ClassifyConfig::try_from(merged)
    }
}

/// Resolved `classify` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifyConfig {
    pub(crate) sample: Utf8PathBuf,
    pub(crate) sport: AptitudeSport,
    pub(crate) sample_format: SampleFormat,
}

fn parse_sport(name: &str) -> Result<AptitudeSport, CliError> {
    name.parse().map_err(CliError::UnknownAptitudeSport)
}

impl TryFrom<ClassifyArgs> for ClassifyConfig {
    type Error = CliError;

    fn try_from(args: ClassifyArgs) -> Result<Self, Self::Error> {
        let sample = args.sample.ok_or(CliError::MissingArgument {
            field: ARG_SAMPLE,
            env: ENV_CLASSIFY_SAMPLE,
        })?;
        let selected = args
            .sport
            .as_deref()
            .map(parse_sport)
            .transpose()?
            .into_iter()
            .collect::<Vec<_>>();
        let offered = match args.offers.as_deref() {
            Some(list) => list
                .split(',')
                .filter(|name| !name.trim().is_empty())
                .map(parse_sport)
                .collect::<Result<Vec<_>, _>>()?,
            None => ALL_APTITUDE_SPORTS.to_vec(),
        };
        Ok(Self {
            sample,
            sport: AptitudeSport::pick(&selected, &offered),
            sample_format: args.sample_format.unwrap_or_default(),
        })
    }
}

/// JSON document printed by `classify`.
#[derive(Debug, Serialize)]
pub(crate) struct ClassifyReport {
    pub(crate) sport: AptitudeSport,
    pub(crate) aptitude: Aptitude,
    pub(crate) color: &'static str,
}

pub(super) fn run_classify(args: ClassifyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_classify_with(args, &mut stdout)
}

pub(super) fn run_classify_with(
    args: ClassifyArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.sample, ARG_SAMPLE)?;
    let sample = load_sample(&config.sample, config.sample_format)?;
    let aptitude = classify_sample(config.sport, &sample);
    write_json(
        writer,
        &ClassifyReport {
            sport: config.sport,
            aptitude,
            color: aptitude.color(),
        },
    )
}

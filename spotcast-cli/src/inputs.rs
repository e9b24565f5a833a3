//! Input loading and option resolution shared by the subcommands.

use std::io::Write;

use camino::Utf8Path;
use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};
use spotcast_core::{
    CompliancePolicy, HardStep, LinearRamp, RuleCatalogue, VariableRule, WeatherSample,
};
use spotcast_data::{parse_catalogue, parse_flat_sample};
use spotcast_fs::{file_is_file, read_utf8_to_string};
use spotcast_scorer::WeightedScorer;

use crate::{ARG_RULES, ARG_SAMPLE, CliError};

/// Layout of the `--sample` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum SampleFormat {
    /// Canonical `WeatherSample` JSON keyed by variable name.
    #[default]
    Canonical,
    /// Flat provider averages such as `wind_speed_10m` and `temperature_2m`.
    Flat,
}

/// Compliance policy requested with `--policy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum PolicyKind {
    /// All-or-nothing compliance.
    #[default]
    HardStep,
    /// Compliance decays linearly outside the bounds.
    LinearRamp,
}

/// Compliance policy resolved from `--policy` and `--ramp-margin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SelectedPolicy {
    HardStep(HardStep),
    LinearRamp(LinearRamp),
}

impl SelectedPolicy {
    pub(crate) fn resolve(kind: Option<PolicyKind>, margin: Option<f64>) -> Result<Self, CliError> {
        match (kind.unwrap_or_default(), margin) {
            (PolicyKind::HardStep, None) => Ok(Self::HardStep(HardStep)),
            (PolicyKind::HardStep, Some(margin)) => {
                warn!("ignoring ramp margin {margin}; the hard-step policy has no margin");
                Ok(Self::HardStep(HardStep))
            }
            (PolicyKind::LinearRamp, None) => Ok(Self::LinearRamp(LinearRamp::default())),
            (PolicyKind::LinearRamp, Some(margin)) => LinearRamp::new(margin)
                .map(Self::LinearRamp)
                .ok_or(CliError::InvalidRampMargin { margin }),
        }
    }

    pub(crate) const fn scorer(self) -> WeightedScorer<Self> {
        WeightedScorer::new(self)
    }
}

impl CompliancePolicy for SelectedPolicy {
    fn compliance(&self, value: f64, rule: &VariableRule) -> f64 {
        match self {
            Self::HardStep(policy) => policy.compliance(value, rule),
            Self::LinearRamp(policy) => policy.compliance(value, rule),
        }
    }
}

pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_input(path: &Utf8Path, field: &'static str) -> Result<String, CliError> {
    read_utf8_to_string(path).map_err(|source| CliError::ReadInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load the `--sample` file in the requested layout.
pub(crate) fn load_sample(path: &Utf8Path, format: SampleFormat) -> Result<WeatherSample, CliError> {
    let text = read_input(path, ARG_SAMPLE)?;
    match format {
        SampleFormat::Canonical => {
            serde_json::from_str(&text).map_err(|source| CliError::ParseSample {
                path: path.to_path_buf(),
                source,
            })
        }
        SampleFormat::Flat => parse_flat_sample(&text).map_err(|source| CliError::Payload {
            field: ARG_SAMPLE,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the `--rules` admin catalogue.
pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<RuleCatalogue, CliError> {
    let text = read_input(path, ARG_RULES)?;
    parse_catalogue(&text).map_err(|source| CliError::Payload {
        field: ARG_RULES,
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

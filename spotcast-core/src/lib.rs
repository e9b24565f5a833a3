//! Core domain types for the Spotcast suitability engine.
//!
//! These models validate on construction so downstream scoring can trust
//! them: rules reject inverted or non-finite thresholds, rule sets reject
//! duplicate variables, and scores are always labelled values in
//! `0.0..=100.0`. Constructors return `Result` to surface invalid input
//! early.
//!
//! Scoring itself lives behind the [`Scorer`] and [`CompliancePolicy`]
//! traits so alternative aggregation strategies can be plugged in.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod aptitude;
mod catalogue;
mod compliance;
mod error;
mod rule;
mod rule_set;
mod sample;
mod score;
mod scorer;
mod variable;

pub use aptitude::{Aptitude, AptitudeSport};
pub use catalogue::RuleCatalogue;
pub use compliance::{CompliancePolicy, DEFAULT_RAMP_MARGIN, HardStep, LinearRamp};
pub use error::{RuleDefect, ScoringError};
pub use rule::{DEFAULT_WEIGHT, Operator, VariableRule};
pub use rule_set::{SportId, SportIdError, SportRuleSet};
pub use sample::WeatherSample;
pub use score::{MAX_SCORE, Score, ScoreLabel};
pub use scorer::Scorer;
pub use variable::{UnknownVariable, WeatherVariable};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

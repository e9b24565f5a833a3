//! Scoring for Spotcast weather samples.
//!
//! The crate provides three complementary capabilities:
//! - **Weighted scoring** evaluates each rule of a
//!   [`SportRuleSet`](spotcast_core::SportRuleSet) against a
//!   [`WeatherSample`](spotcast_core::WeatherSample) through a
//!   [`CompliancePolicy`](spotcast_core::CompliancePolicy) and averages the
//!   compliance by rule weight into a `0..=100` score.
//!   [`WeightedScorer`] implements the [`Scorer`](spotcast_core::Scorer)
//!   trait so callers can swap in other strategies.
//! - **Aptitude classification** labels raw wind, wave and rain readings as
//!   `excelente`, `bueno` or `malo` for quick map-marker colouring.
//! - **Assessment and ranking** combine the two: [`assess`] falls back to the
//!   classifier when scoring fails, and [`rank`] orders every active sport in
//!   a [`RuleCatalogue`](spotcast_core::RuleCatalogue).
//!
//! # Examples
//!
//! ```
//! use spotcast_core::{SportId, SportRuleSet, VariableRule, WeatherSample, WeatherVariable};
//! use spotcast_scorer::score;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let wind = VariableRule::between(WeatherVariable::WindSpeed, 8.0, 14.0, 1.0)?;
//! let kite = SportRuleSet::new(SportId::new("kite")?, "Kitesurf", vec![wind])?;
//! let sample = WeatherSample::new().with(WeatherVariable::WindSpeed, 20.0);
//! assert_eq!(score(&sample, &kite)?.to_string(), "0/100 (Pobre)");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod aptitude;
mod assessment;
mod evaluator;
mod ranking;
mod weighted;

pub use aptitude::{AptitudeReadings, classify, classify_sample};
pub use assessment::{Assessment, Unscored, assess};
pub use evaluator::evaluate_rule;
pub use ranking::{RankedSport, Ranking, UnrankedSport, rank};
pub use weighted::{RuleContribution, ScoreBreakdown, WeightedScorer, score};

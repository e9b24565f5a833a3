//! Score a sample, falling back to the aptitude heuristic when the weighted
//! scorer cannot be applied.

use std::fmt;

use log::warn;
use serde::{Serialize, Serializer};
use spotcast_core::{Aptitude, AptitudeSport, Score, Scorer, ScoringError, SportRuleSet, WeatherSample};

use crate::classify_sample;

/// Why a sample could not be given a weighted score.
#[derive(Debug, Clone, PartialEq)]
pub enum Unscored {
    /// No rule set was configured for the sport.
    NoRuleSet,
    /// The scorer rejected the inputs.
    Failed(ScoringError),
}

impl fmt::Display for Unscored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRuleSet => f.write_str("no rule set configured"),
            Self::Failed(err) => write!(f, "{err}"),
        }
    }
}

impl Serialize for Unscored {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of [`assess`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Assessment {
    /// The weighted scorer produced a score.
    Scored(Score),
    /// Scoring failed; the heuristic label is shown instead.
    Fallback {
        /// Heuristic label.
        aptitude: Aptitude,
        /// Why scoring was not possible.
        reason: Unscored,
    },
    /// Neither a score nor a heuristic label is available.
    NoData {
        /// Why scoring was not possible.
        reason: Unscored,
    },
}

impl Assessment {
    /// Degrade an unscored sample to the `fallback` heuristic, or to
    /// [`Assessment::NoData`] when no heuristic is requested.
    #[must_use]
    pub fn unscored(
        sample: &WeatherSample,
        reason: Unscored,
        fallback: Option<AptitudeSport>,
    ) -> Self {
        match fallback {
            Some(sport) => {
                warn!("falling back to {sport} aptitude: {reason}");
                Self::Fallback {
                    aptitude: classify_sample(sport, sample),
                    reason,
                }
            }
            None => {
                warn!("no score available: {reason}");
                Self::NoData { reason }
            }
        }
    }

    /// Return the score when one was produced.
    #[must_use]
    pub const fn score(&self) -> Option<&Score> {
        match self {
            Self::Scored(score) => Some(score),
            Self::Fallback { .. } | Self::NoData { .. } => None,
        }
    }
}

/// Score `sample`, degrading to the aptitude classifier and then to
/// [`Assessment::NoData`].
///
/// Scoring errors are carried in the result as the reason; they are never
/// turned into a fabricated score.
///
/// # Examples
/// ```
/// use spotcast_core::{Aptitude, AptitudeSport, WeatherSample, WeatherVariable};
/// use spotcast_scorer::{Assessment, WeightedScorer, assess};
///
/// let sample = WeatherSample::new().with(WeatherVariable::WindSpeed, 10.0);
/// let outcome = assess(&sample, None, Some(AptitudeSport::Kite), &WeightedScorer::new(spotcast_core::HardStep));
/// assert!(matches!(outcome, Assessment::Fallback { aptitude: Aptitude::Excelente, .. }));
/// ```
#[must_use]
pub fn assess<S: Scorer + ?Sized>(
    sample: &WeatherSample,
    rules: Option<&SportRuleSet>,
    fallback: Option<AptitudeSport>,
    scorer: &S,
) -> Assessment {
    let reason = match rules.map(|rule_set| scorer.score(sample, rule_set)) {
        Some(Ok(score)) => return Assessment::Scored(score),
        Some(Err(err)) => Unscored::Failed(err),
        None => Unscored::NoRuleSet,
    };
    Assessment::unscored(sample, reason, fallback)
}

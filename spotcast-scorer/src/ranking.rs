//! Rank every active sport in a catalogue for one sample.

use std::cmp::Ordering;

use serde::{Serialize, Serializer};
use spotcast_core::{RuleCatalogue, Score, Scorer, ScoringError, SportId, WeatherSample};

/// A sport that received a score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSport {
    /// Sport identifier.
    pub sport_id: SportId,
    /// Human-readable sport name.
    pub sport_name: String,
    /// The sport's score for the sample.
    pub score: Score,
}

/// A sport whose rules could not be applied to the sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnrankedSport {
    /// Sport identifier.
    pub sport_id: SportId,
    /// Why scoring failed.
    #[serde(serialize_with = "display_error")]
    pub error: ScoringError,
}

fn display_error<S: Serializer>(error: &ScoringError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Scores for every active sport, best first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Ranking {
    ranked: Vec<RankedSport>,
    unranked: Vec<UnrankedSport>,
}

impl Ranking {
    /// Scored sports by descending score, ties broken by sport id.
    #[must_use]
    pub fn ranked(&self) -> &[RankedSport] {
        &self.ranked
    }

    /// Sports that could not be scored, in sport id order.
    #[must_use]
    pub fn unranked(&self) -> &[UnrankedSport] {
        &self.unranked
    }

    /// The top-scored sport, if any sport was scored.
    #[must_use]
    pub fn best(&self) -> Option<&RankedSport> {
        self.ranked.first()
    }
}

fn by_score_then_id(left: &RankedSport, right: &RankedSport) -> Ordering {
    right
        .score
        .value()
        .total_cmp(&left.score.value())
        .then_with(|| left.sport_id.cmp(&right.sport_id))
}

/// Score `sample` for every active sport in `catalogue`.
///
/// Inactive sports are skipped entirely; failures are kept alongside the
/// sport they belong to rather than aborting the ranking.
///
/// # Examples
/// ```
/// use spotcast_core::{HardStep, RuleCatalogue, SportId, SportRuleSet, VariableRule, WeatherSample, WeatherVariable};
/// use spotcast_scorer::{WeightedScorer, rank};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let kite = SportRuleSet::new(
///     SportId::new("kite")?,
///     "Kitesurf",
///     vec![VariableRule::min(WeatherVariable::WindSpeed, 12.0, 1.0)?],
/// )?;
/// let surf = SportRuleSet::new(
///     SportId::new("surf")?,
///     "Surf",
///     vec![VariableRule::max(WeatherVariable::WindSpeed, 10.0, 1.0)?],
/// )?;
/// let catalogue: RuleCatalogue = [kite, surf].into_iter().collect();
/// let sample = WeatherSample::new().with(WeatherVariable::WindSpeed, 18.0);
/// let ranking = rank(&sample, &catalogue, &WeightedScorer::new(HardStep));
/// assert_eq!(ranking.best().map(|s| s.sport_id.as_str()), Some("kite"));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn rank<S: Scorer + ?Sized>(
    sample: &WeatherSample,
    catalogue: &RuleCatalogue,
    scorer: &S,
) -> Ranking {
    let mut ranking = Ranking::default();
    for rule_set in catalogue.active() {
        match scorer.score(sample, rule_set) {
            Ok(score) => ranking.ranked.push(RankedSport {
                sport_id: rule_set.sport_id().clone(),
                sport_name: rule_set.sport_name().to_owned(),
                score,
            }),
            Err(error) => ranking.unranked.push(UnrankedSport {
                sport_id: rule_set.sport_id().clone(),
                error,
            }),
        }
    }
    ranking.ranked.sort_by(by_score_then_id);
    ranking
}

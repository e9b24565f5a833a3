//! Weighted-average scorer over a sport's rule set.

use serde::Serialize;
use spotcast_core::{
    CompliancePolicy, HardStep, MAX_SCORE, Score, Scorer, ScoringError, SportRuleSet,
    WeatherSample, WeatherVariable,
};

use crate::evaluate_rule;

/// One rule's share of a weighted score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleContribution {
    /// Variable the rule targets.
    pub variable: WeatherVariable,
    /// Reading taken from the sample.
    pub value: f64,
    /// Compliance fraction in `0.0..=1.0`.
    pub compliance: f64,
    /// Weight configured on the rule.
    pub weight: f64,
}

/// A score together with the per-rule contributions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// The aggregate score.
    pub score: Score,
    /// Contributions in rule order.
    pub contributions: Vec<RuleContribution>,
}

/// Scorer averaging per-rule compliance by rule weight.
///
/// The score is `100 * Σ(compliance × weight) / Σ weight`, clamped to
/// `0.0..=100.0`. Compliance comes from the policy `P`, which defaults to
/// the boolean [`HardStep`].
///
/// # Examples
/// ```
/// use spotcast_core::{HardStep, Scorer, ScoreLabel, SportId, SportRuleSet, VariableRule, WeatherSample, WeatherVariable};
/// use spotcast_scorer::WeightedScorer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let wind = VariableRule::between(WeatherVariable::WindSpeed, 8.0, 14.0, 1.0)?;
/// let kite = SportRuleSet::new(SportId::new("kite")?, "Kitesurf", vec![wind])?;
/// let sample = WeatherSample::new()
///     .with(WeatherVariable::WindSpeed, 10.0)
///     .with(WeatherVariable::WaveHeight, 0.0);
/// let score = WeightedScorer::new(HardStep).score(&sample, &kite)?;
/// assert_eq!(score.value(), 100.0);
/// assert_eq!(score.label(), ScoreLabel::Excelente);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedScorer<P = HardStep> {
    policy: P,
}

impl<P: CompliancePolicy> WeightedScorer<P> {
    /// Construct a scorer using `policy` for per-rule compliance.
    #[must_use]
    pub const fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Borrow the compliance policy.
    #[must_use]
    pub const fn policy(&self) -> &P {
        &self.policy
    }

    /// Score `sample` and report how each rule contributed.
    ///
    /// # Errors
    /// Returns [`ScoringError::InactiveRuleSet`] for a deactivated sport,
    /// [`ScoringError::EmptyRuleSet`] when no rules are configured,
    /// [`ScoringError::MissingVariable`] when the sample lacks a reading a
    /// rule needs, [`ScoringError::InvalidRule`] for malformed rules, and
    /// [`ScoringError::ZeroTotalWeight`] when every weight is zero.
    pub fn breakdown(
        &self,
        sample: &WeatherSample,
        rules: &SportRuleSet,
    ) -> Result<ScoreBreakdown, ScoringError> {
        if !rules.is_active() {
            return Err(ScoringError::InactiveRuleSet {
                sport_id: rules.sport_id().clone(),
            });
        }
        if rules.rules().is_empty() {
            return Err(ScoringError::EmptyRuleSet {
                sport_id: rules.sport_id().clone(),
            });
        }

        let contributions = rules
            .rules()
            .iter()
            .map(|rule| {
                let value = sample
                    .value(rule.variable)
                    .ok_or(ScoringError::MissingVariable {
                        variable: rule.variable,
                    })?;
                let compliance = evaluate_rule(value, rule, &self.policy)?;
                Ok(RuleContribution {
                    variable: rule.variable,
                    value,
                    compliance,
                    weight: rule.weight,
                })
            })
            .collect::<Result<Vec<_>, ScoringError>>()?;

        let value = weighted_average(&contributions).ok_or_else(|| {
            ScoringError::ZeroTotalWeight {
                sport_id: rules.sport_id().clone(),
            }
        })?;
        Ok(ScoreBreakdown {
            score: Score::new(value),
            contributions,
        })
    }
}

impl<P: CompliancePolicy> Scorer for WeightedScorer<P> {
    fn score(&self, sample: &WeatherSample, rules: &SportRuleSet) -> Result<Score, ScoringError> {
        self.breakdown(sample, rules).map(|breakdown| breakdown.score)
    }
}

/// Weighted mean of compliance on the `0.0..=100.0` scale; `None` when the
/// weights sum to zero.
///
/// Weights are divided by the largest one before summing, so the sums stay
/// finite for any set of finite weights.
#[expect(
    clippy::float_arithmetic,
    reason = "score aggregation requires a weighted average"
)]
fn weighted_average(contributions: &[RuleContribution]) -> Option<f64> {
    let largest = contributions
        .iter()
        .map(|contribution| contribution.weight)
        .fold(0.0_f64, f64::max);
    if largest <= 0.0 {
        return None;
    }
    let (weighted, total) = contributions
        .iter()
        .fold((0.0_f64, 0.0_f64), |(weighted, total), contribution| {
            let weight = contribution.weight / largest;
            (weighted + contribution.compliance * weight, total + weight)
        });
    Some(weighted / total * MAX_SCORE)
}

/// Score `sample` against `rules` with the hard-step baseline policy.
///
/// # Errors
/// See [`WeightedScorer::breakdown`].
pub fn score(sample: &WeatherSample, rules: &SportRuleSet) -> Result<Score, ScoringError> {
    WeightedScorer::<HardStep>::default().score(sample, rules)
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    clippy::float_arithmetic,
    reason = "tests fail fast on broken fixtures and compare floats"
)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use spotcast_core::test_support::{kite_wind_window, mild_summer_day, seeded_catalogue};
    use spotcast_core::{LinearRamp, ScoreLabel, SportId, VariableRule};

    #[fixture]
    fn kite() -> SportRuleSet {
        kite_wind_window().expect("kite fixture")
    }

    fn wind(speed: f64) -> WeatherSample {
        WeatherSample::new()
            .with(WeatherVariable::WindSpeed, speed)
            .with(WeatherVariable::WaveHeight, 0.0)
    }

    #[rstest]
    #[case(10.0, 100.0, ScoreLabel::Excelente)]
    #[case(8.0, 100.0, ScoreLabel::Excelente)]
    #[case(14.0, 100.0, ScoreLabel::Excelente)]
    #[case(20.0, 0.0, ScoreLabel::Pobre)]
    #[case(7.9, 0.0, ScoreLabel::Pobre)]
    fn kite_window_scores(
        kite: SportRuleSet,
        #[case] speed: f64,
        #[case] expected: f64,
        #[case] label: ScoreLabel,
    ) {
        let result = score(&wind(speed), &kite).expect("scorable");
        assert_eq!(result.value(), expected);
        assert_eq!(result.label(), label);
    }

    #[rstest]
    fn weights_shape_the_average() {
        let rules = vec![
            VariableRule::min(WeatherVariable::WaveHeight, 1.0, 3.0).expect("wave rule"),
            VariableRule::max(WeatherVariable::WindSpeed, 10.0, 1.0).expect("wind rule"),
        ];
        let surf = SportRuleSet::new(SportId::new("surf").expect("id"), "Surf", rules)
            .expect("surf rules");
        let sample = WeatherSample::new()
            .with(WeatherVariable::WaveHeight, 1.5)
            .with(WeatherVariable::WindSpeed, 25.0);
        let result = score(&sample, &surf).expect("scorable");
        assert_eq!(result.value(), 75.0);
        assert_eq!(result.label(), ScoreLabel::Excelente);
    }

    #[rstest]
    fn inactive_is_checked_before_emptiness() {
        let empty = SportRuleSet::new(SportId::new("kayak").expect("id"), "Kayak", Vec::new())
            .expect("empty rules")
            .with_active(false);
        assert!(matches!(
            score(&wind(10.0), &empty),
            Err(ScoringError::InactiveRuleSet { .. })
        ));
    }

    #[rstest]
    fn empty_rule_set_fails() {
        let empty = SportRuleSet::new(SportId::new("kayak").expect("id"), "Kayak", Vec::new())
            .expect("empty rules");
        assert_eq!(
            score(&wind(10.0), &empty),
            Err(ScoringError::EmptyRuleSet {
                sport_id: SportId::new("kayak").expect("id"),
            })
        );
    }

    #[rstest]
    fn missing_reading_fails(kite: SportRuleSet) {
        let sample = WeatherSample::new().with(WeatherVariable::WaveHeight, 1.0);
        assert_eq!(
            score(&sample, &kite),
            Err(ScoringError::MissingVariable {
                variable: WeatherVariable::WindSpeed
            })
        );
    }

    #[rstest]
    fn zero_weights_fail() {
        let rules = vec![VariableRule::min(WeatherVariable::UvIndex, 1.0, 0.0).expect("rule")];
        let set = SportRuleSet::new(SportId::new("kite").expect("id"), "Kitesurf", rules)
            .expect("rules");
        let sample = WeatherSample::new().with(WeatherVariable::UvIndex, 3.0);
        assert!(matches!(
            score(&sample, &set),
            Err(ScoringError::ZeroTotalWeight { .. })
        ));
    }

    #[rstest]
    fn extreme_weights_keep_a_finite_average() {
        let rules = vec![
            VariableRule::min(WeatherVariable::WindSpeed, 0.0, f64::MAX).expect("wind rule"),
            VariableRule::min(WeatherVariable::WaveHeight, 0.0, f64::MAX).expect("wave rule"),
        ];
        let set = SportRuleSet::new(SportId::new("kite").expect("id"), "Kitesurf", rules)
            .expect("rules");
        let sample = WeatherSample::new()
            .with(WeatherVariable::WindSpeed, 10.0)
            .with(WeatherVariable::WaveHeight, 1.0);
        let result = score(&sample, &set).expect("scorable");
        assert_eq!(result.value(), 100.0);
        assert_eq!(result.label(), ScoreLabel::Excelente);
    }

    #[rstest]
    fn extreme_weight_dominates_a_small_one() {
        let rules = vec![
            VariableRule::min(WeatherVariable::WindSpeed, 0.0, f64::MAX).expect("wind rule"),
            VariableRule::min(WeatherVariable::WaveHeight, 5.0, 1.0).expect("wave rule"),
        ];
        let set = SportRuleSet::new(SportId::new("surf").expect("id"), "Surf", rules)
            .expect("rules");
        let sample = WeatherSample::new()
            .with(WeatherVariable::WindSpeed, 10.0)
            .with(WeatherVariable::WaveHeight, 1.0);
        let result = score(&sample, &set).expect("scorable");
        assert!((result.value() - 100.0).abs() < 1e-9, "got {}", result.value());
    }

    #[rstest]
    fn breakdown_lists_contributions_in_rule_order() {
        let catalogue = seeded_catalogue().expect("seeded catalogue");
        let surf = catalogue
            .get(&SportId::new("surf").expect("id"))
            .expect("surf seeded");
        let breakdown = WeightedScorer::<HardStep>::default()
            .breakdown(&mild_summer_day(), surf)
            .expect("scorable");
        let variables: Vec<_> = breakdown.contributions.iter().map(|c| c.variable).collect();
        let expected: Vec<_> = surf.rules().iter().map(|r| r.variable).collect();
        assert_eq!(variables, expected);
        assert!(
            breakdown
                .contributions
                .iter()
                .all(|c| (0.0..=1.0).contains(&c.compliance))
        );
    }

    #[rstest]
    fn ramp_policy_gives_partial_credit(kite: SportRuleSet) {
        let scorer = WeightedScorer::new(LinearRamp::new(12.0).expect("margin"));
        let result = scorer.score(&wind(20.0), &kite).expect("scorable");
        assert!((result.value() - 50.0).abs() < 1e-9, "got {}", result.value());
        assert_eq!(result.label(), ScoreLabel::Bueno);
    }
}

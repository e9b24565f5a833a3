//! Per-rule compliance evaluation.

use log::debug;
use spotcast_core::{CompliancePolicy, ScoringError, VariableRule};

/// Evaluate how well a single reading satisfies `rule`.
///
/// The rule is validated before the policy sees it, and the policy output is
/// sanitised into `0.0..=1.0`.
///
/// # Errors
/// Returns [`ScoringError::InvalidRule`] when the rule is malformed (for
/// example a `between` rule with inverted bounds) and
/// [`ScoringError::MissingVariable`] when the reading is not finite.
///
/// # Examples
/// ```
/// use spotcast_core::{HardStep, VariableRule, WeatherVariable};
/// use spotcast_scorer::evaluate_rule;
///
/// # fn main() -> Result<(), spotcast_core::ScoringError> {
/// let rule = VariableRule::between(WeatherVariable::WindSpeed, 8.0, 14.0, 1.0)?;
/// assert_eq!(evaluate_rule(10.0, &rule, &HardStep)?, 1.0);
/// assert_eq!(evaluate_rule(20.0, &rule, &HardStep)?, 0.0);
/// # Ok(())
/// # }
/// ```
pub fn evaluate_rule<P: CompliancePolicy>(
    value: f64,
    rule: &VariableRule,
    policy: &P,
) -> Result<f64, ScoringError> {
    rule.validate()?;
    if !value.is_finite() {
        return Err(ScoringError::MissingVariable {
            variable: rule.variable,
        });
    }
    let compliance = P::sanitise(policy.compliance(value, rule));
    debug!(
        "{} {} {:?}: reading {value} complies {compliance}",
        rule.variable,
        rule.operator,
        rule.bounds()
    );
    Ok(compliance)
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    clippy::float_arithmetic,
    reason = "tests fail fast on broken fixtures and compare floats"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use spotcast_core::{HardStep, LinearRamp, Operator, RuleDefect, WeatherVariable};

    struct Overshoot;

    impl CompliancePolicy for Overshoot {
        fn compliance(&self, _value: f64, _rule: &VariableRule) -> f64 {
            7.5
        }
    }

    fn wave_floor() -> VariableRule {
        VariableRule::min(WeatherVariable::WaveHeight, 1.2, 1.0).expect("valid floor")
    }

    #[rstest]
    #[case(Operator::Min, 5.0, 1.0)]
    #[case(Operator::Min, 2.9, 0.0)]
    #[case(Operator::Max, 7.0, 1.0)]
    #[case(Operator::Max, 7.1, 0.0)]
    #[case(Operator::Between, 3.0, 1.0)]
    #[case(Operator::Between, 7.0, 1.0)]
    #[case(Operator::Between, 2.0, 0.0)]
    fn hard_step_per_operator(
        #[case] operator: Operator,
        #[case] value: f64,
        #[case] expected: f64,
    ) {
        let rule = VariableRule::new(WeatherVariable::WindSpeed, operator, 3.0, 7.0, 1.0)
            .expect("valid rule");
        assert_eq!(evaluate_rule(value, &rule, &HardStep), Ok(expected));
    }

    #[rstest]
    fn rejects_inverted_rule_built_from_fields() {
        let rule = VariableRule {
            variable: WeatherVariable::WindSpeed,
            operator: Operator::Between,
            threshold_min: 14.0,
            threshold_max: 8.0,
            weight: 1.0,
        };
        let err = evaluate_rule(10.0, &rule, &HardStep).expect_err("inverted bounds");
        assert!(matches!(
            err,
            ScoringError::InvalidRule {
                defect: RuleDefect::InvertedBounds { .. },
                ..
            }
        ));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn non_finite_readings_count_as_missing(#[case] value: f64) {
        assert_eq!(
            evaluate_rule(value, &wave_floor(), &HardStep),
            Err(ScoringError::MissingVariable {
                variable: WeatherVariable::WaveHeight
            })
        );
    }

    #[rstest]
    fn policy_output_is_clamped() {
        assert_eq!(evaluate_rule(0.0, &wave_floor(), &Overshoot), Ok(1.0));
    }

    #[rstest]
    fn ramp_softens_near_misses() {
        let ramp = LinearRamp::new(1.0).expect("positive margin");
        let compliance = evaluate_rule(0.7, &wave_floor(), &ramp).expect("valid evaluation");
        assert!((compliance - 0.5).abs() < 1e-9, "got {compliance}");
    }
}

//! Policies turning a reading and a rule into a compliance fraction.
//!
//! The evaluator validates a rule before handing it to a policy, so policies
//! may rely on [`VariableRule::bounds`] being finite and ordered.

use crate::VariableRule;

/// Margin, in the variable's own unit, over which [`LinearRamp`] falls to zero.
pub const DEFAULT_RAMP_MARGIN: f64 = 10.0;

/// Measure how well a reading satisfies a rule.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so markers can be
/// scored in parallel, and must return `1.0` whenever the reading lies
/// within the bounds the rule's operator reads.
///
/// Use [`CompliancePolicy::sanitise`] to keep results inside `0.0..=1.0`.
///
/// # Examples
///
/// ```rust
/// use spotcast_core::{CompliancePolicy, VariableRule};
///
/// struct Lenient;
///
/// impl CompliancePolicy for Lenient {
///     fn compliance(&self, _value: f64, _rule: &VariableRule) -> f64 {
///         1.0
///     }
/// }
///
/// assert_eq!(Lenient::sanitise(f64::NAN), 0.0);
/// ```
pub trait CompliancePolicy: Send + Sync {
    /// Return the compliance of `value` with `rule`.
    fn compliance(&self, value: f64, rule: &VariableRule) -> f64;

    /// Clamp a raw fraction into `0.0..=1.0`; non-finite values become `0.0`.
    fn sanitise(fraction: f64) -> f64
    where
        Self: Sized,
    {
        if !fraction.is_finite() {
            return 0.0;
        }
        fraction.clamp(0.0, 1.0)
    }
}

/// Distance from `value` to the nearest bound it violates, `0.0` when inside.
///
/// A non-finite reading satisfies no rule and lies infinitely far away.
fn violation(value: f64, rule: &VariableRule) -> f64 {
    if !value.is_finite() {
        return f64::INFINITY;
    }
    let (lower, upper) = rule.bounds();
    let below = lower.map_or(0.0, |bound| (bound - value).max(0.0));
    let above = upper.map_or(0.0, |bound| (value - bound).max(0.0));
    below.max(above)
}

/// Boolean compliance: `1.0` inside the accepted range, `0.0` outside.
///
/// # Examples
/// ```
/// use spotcast_core::{CompliancePolicy, HardStep, VariableRule, WeatherVariable};
///
/// # fn main() -> Result<(), spotcast_core::ScoringError> {
/// let rule = VariableRule::min(WeatherVariable::WaveHeight, 1.2, 1.0)?;
/// assert_eq!(HardStep.compliance(1.2, &rule), 1.0);
/// assert_eq!(HardStep.compliance(1.19, &rule), 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HardStep;

impl CompliancePolicy for HardStep {
    fn compliance(&self, value: f64, rule: &VariableRule) -> f64 {
        if violation(value, rule) > 0.0 {
            0.0
        } else {
            1.0
        }
    }
}

/// Compliance falling linearly from `1.0` at the violated bound to `0.0`
/// at `margin` units beyond it.
///
/// # Examples
/// ```
/// use spotcast_core::{CompliancePolicy, LinearRamp, VariableRule, WeatherVariable};
///
/// # fn main() -> Result<(), spotcast_core::ScoringError> {
/// let ramp = LinearRamp::new(4.0).expect("positive margin");
/// let rule = VariableRule::max(WeatherVariable::WindSpeed, 10.0, 1.0)?;
/// assert_eq!(ramp.compliance(12.0, &rule), 0.5);
/// assert_eq!(ramp.compliance(20.0, &rule), 0.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRamp {
    margin: f64,
}

impl LinearRamp {
    /// Construct a ramp; returns `None` unless `margin` is finite and positive.
    pub fn new(margin: f64) -> Option<Self> {
        (margin.is_finite() && margin > 0.0).then_some(Self { margin })
    }

    /// Width of the ramp.
    pub const fn margin(&self) -> f64 {
        self.margin
    }
}

impl Default for LinearRamp {
    fn default() -> Self {
        Self {
            margin: DEFAULT_RAMP_MARGIN,
        }
    }
}

impl CompliancePolicy for LinearRamp {
    fn compliance(&self, value: f64, rule: &VariableRule) -> f64 {
        Self::sanitise(1.0 - violation(value, rule) / self.margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeatherVariable;
    use rstest::{fixture, rstest};

    #[fixture]
    fn window() -> VariableRule {
        VariableRule::between(WeatherVariable::WindSpeed, 8.0, 14.0, 1.0).unwrap()
    }

    #[rstest]
    #[case(8.0, 1.0)]
    #[case(14.0, 1.0)]
    #[case(7.999, 0.0)]
    #[case(14.001, 0.0)]
    fn hard_step_is_inclusive(window: VariableRule, #[case] value: f64, #[case] expected: f64) {
        assert_eq!(HardStep.compliance(value, &window), expected);
    }

    #[rstest]
    #[case(11.0, 1.0)]
    #[case(3.0, 0.5)]
    #[case(19.0, 0.5)]
    #[case(-2.0, 0.0)]
    #[case(40.0, 0.0)]
    fn ramp_uses_distance_to_nearest_bound(
        window: VariableRule,
        #[case] value: f64,
        #[case] expected: f64,
    ) {
        let ramp = LinearRamp::default();
        assert!((ramp.compliance(value, &window) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn ramp_rejects_unusable_margins(#[case] margin: f64) {
        assert!(LinearRamp::new(margin).is_none());
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn non_finite_readings_never_comply(window: VariableRule, #[case] value: f64) {
        assert_eq!(HardStep.compliance(value, &window), 0.0);
        assert_eq!(LinearRamp::default().compliance(value, &window), 0.0);
    }

    #[rstest]
    fn min_rule_ignores_upper_side() {
        let rule = VariableRule::min(WeatherVariable::WaveHeight, 1.0, 1.0).unwrap();
        assert_eq!(HardStep.compliance(50.0, &rule), 1.0);
        assert_eq!(LinearRamp::default().compliance(50.0, &rule), 1.0);
    }
}

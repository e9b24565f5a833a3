//! Threshold rules relating one weather variable to a sport.

use std::fmt;
use std::str::FromStr;

use crate::{RuleDefect, ScoringError, WeatherVariable};

/// Weight applied when a payload omits one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Comparison applied between a reading and a rule's thresholds.
///
/// # Examples
/// ```
/// use spotcast_core::Operator;
///
/// assert_eq!("Between".parse::<Operator>(), Ok(Operator::Between));
/// assert!("above".parse::<Operator>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Operator {
    /// Satisfied when the reading is at least `threshold_min`.
    Min,
    /// Satisfied when the reading is at most `threshold_max`.
    Max,
    /// Satisfied when the reading lies within both thresholds, inclusive.
    Between,
}

impl Operator {
    /// Return the operator as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Between => "between",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = RuleDefect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "between" => Ok(Self::Between),
            _ => Err(RuleDefect::UnknownOperator {
                operator: s.to_owned(),
            }),
        }
    }
}

/// A threshold rule for one variable with its contribution weight.
///
/// `min` rules ignore `threshold_max`, `max` rules ignore `threshold_min`,
/// and `between` rules read both with `threshold_min <= threshold_max`.
/// Fields are public for ergonomic construction in callers; anything built
/// that way is re-checked by [`VariableRule::validate`] before evaluation.
///
/// # Examples
/// ```
/// use spotcast_core::{Operator, VariableRule, WeatherVariable};
///
/// # fn main() -> Result<(), spotcast_core::ScoringError> {
/// let rule = VariableRule::between(WeatherVariable::WindSpeed, 8.0, 14.0, 1.0)?;
/// assert_eq!(rule.operator, Operator::Between);
/// assert_eq!(rule.bounds(), (Some(8.0), Some(14.0)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableRule {
    /// Weather reading the rule targets.
    pub variable: WeatherVariable,
    /// Comparison applied to the reading.
    pub operator: Operator,
    /// Lower bound, read by `min` and `between`.
    pub threshold_min: f64,
    /// Upper bound, read by `max` and `between`.
    pub threshold_max: f64,
    /// Contribution to the weighted aggregate.
    pub weight: f64,
}

impl VariableRule {
    /// Validate and construct a rule.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidRule`] when a bound the operator reads
    /// is not finite, when `between` bounds are inverted, or when the weight
    /// is negative or not finite.
    pub fn new(
        variable: WeatherVariable,
        operator: Operator,
        threshold_min: f64,
        threshold_max: f64,
        weight: f64,
    ) -> Result<Self, ScoringError> {
        let rule = Self {
            variable,
            operator,
            threshold_min,
            threshold_max,
            weight,
        };
        rule.validate()?;
        Ok(rule)
    }

    /// Build a `min` rule.
    ///
    /// # Errors
    /// See [`VariableRule::new`].
    pub fn min(
        variable: WeatherVariable,
        threshold: f64,
        weight: f64,
    ) -> Result<Self, ScoringError> {
        Self::new(variable, Operator::Min, threshold, 0.0, weight)
    }

    /// Build a `max` rule.
    ///
    /// # Errors
    /// See [`VariableRule::new`].
    pub fn max(
        variable: WeatherVariable,
        threshold: f64,
        weight: f64,
    ) -> Result<Self, ScoringError> {
        Self::new(variable, Operator::Max, 0.0, threshold, weight)
    }

    /// Build a `between` rule.
    ///
    /// # Errors
    /// See [`VariableRule::new`].
    pub fn between(
        variable: WeatherVariable,
        threshold_min: f64,
        threshold_max: f64,
        weight: f64,
    ) -> Result<Self, ScoringError> {
        Self::new(
            variable,
            Operator::Between,
            threshold_min,
            threshold_max,
            weight,
        )
    }

    /// Build a rule from loosely-typed parts.
    ///
    /// A missing weight defaults to [`DEFAULT_WEIGHT`]. A missing bound the
    /// operator ignores defaults to `0.0`; a missing bound the operator reads
    /// is rejected.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidRule`] with
    /// [`RuleDefect::MissingThreshold`] for absent required bounds, or any
    /// error from [`VariableRule::new`].
    pub fn from_parts(
        variable: WeatherVariable,
        operator: Operator,
        threshold_min: Option<f64>,
        threshold_max: Option<f64>,
        weight: Option<f64>,
    ) -> Result<Self, ScoringError> {
        let (needs_min, needs_max) = match operator {
            Operator::Min => (true, false),
            Operator::Max => (false, true),
            Operator::Between => (true, true),
        };
        if (needs_min && threshold_min.is_none()) || (needs_max && threshold_max.is_none()) {
            return Err(ScoringError::invalid_rule(
                variable,
                RuleDefect::MissingThreshold,
            ));
        }
        Self::new(
            variable,
            operator,
            threshold_min.unwrap_or(0.0),
            threshold_max.unwrap_or(0.0),
            weight.unwrap_or(DEFAULT_WEIGHT),
        )
    }

    /// Build a rule from a canonical variable name and an operator name.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidRule`] with
    /// [`RuleDefect::UnknownVariable`] or [`RuleDefect::UnknownOperator`] for
    /// names outside the enumerated sets, or any error from
    /// [`VariableRule::from_parts`].
    ///
    /// # Examples
    /// ```
    /// use spotcast_core::{RuleDefect, ScoringError, VariableRule};
    ///
    /// let err = VariableRule::parse("humidity", "min", Some(1.0), None, None).unwrap_err();
    /// assert!(matches!(
    ///     err,
    ///     ScoringError::InvalidRule { defect: RuleDefect::UnknownVariable, .. }
    /// ));
    /// ```
    pub fn parse(
        variable_name: &str,
        operator: &str,
        threshold_min: Option<f64>,
        threshold_max: Option<f64>,
        weight: Option<f64>,
    ) -> Result<Self, ScoringError> {
        let variable =
            variable_name
                .parse::<WeatherVariable>()
                .map_err(|_| ScoringError::InvalidRule {
                    variable: variable_name.to_owned(),
                    defect: RuleDefect::UnknownVariable,
                })?;
        let parsed_operator = operator
            .parse::<Operator>()
            .map_err(|defect| ScoringError::invalid_rule(variable, defect))?;
        Self::from_parts(
            variable,
            parsed_operator,
            threshold_min,
            threshold_max,
            weight,
        )
    }

    /// Check the operator/threshold/weight invariants.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidRule`] describing the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(self.defect(RuleDefect::InvalidWeight {
                weight: self.weight,
            }));
        }
        let (lower, upper) = self.bounds();
        if lower.is_some_and(|bound| !bound.is_finite())
            || upper.is_some_and(|bound| !bound.is_finite())
        {
            return Err(self.defect(RuleDefect::NonFiniteThreshold));
        }
        if let (Some(min), Some(max)) = (lower, upper)
            && min > max
        {
            return Err(self.defect(RuleDefect::InvertedBounds { min, max }));
        }
        Ok(())
    }

    /// Return the `(lower, upper)` bounds the operator reads.
    pub const fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self.operator {
            Operator::Min => (Some(self.threshold_min), None),
            Operator::Max => (None, Some(self.threshold_max)),
            Operator::Between => (Some(self.threshold_min), Some(self.threshold_max)),
        }
    }

    fn defect(&self, defect: RuleDefect) -> ScoringError {
        ScoringError::invalid_rule(self.variable, defect)
    }
}

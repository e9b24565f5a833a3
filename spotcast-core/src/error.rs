//! Validation failures raised while building rules or scoring a sample.
//!
//! Every variant is a deterministic input error surfaced synchronously to
//! the caller. None of them is retried and none is converted into a score.

use thiserror::Error;

use crate::{SportId, WeatherVariable};

/// Reason a [`VariableRule`](crate::VariableRule) is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleDefect {
    /// The variable name is outside the enumerated set.
    #[error("unknown variable name")]
    UnknownVariable,
    /// The operator is not one of `min`, `max` or `between`.
    #[error("unknown operator '{operator}'")]
    UnknownOperator {
        /// The rejected operator.
        operator: String,
    },
    /// A `between` rule whose lower bound exceeds its upper bound.
    #[error("threshold_min {min} exceeds threshold_max {max}")]
    InvertedBounds {
        /// Lower bound supplied.
        min: f64,
        /// Upper bound supplied.
        max: f64,
    },
    /// A bound the operator reads is NaN or infinite.
    #[error("thresholds must be finite")]
    NonFiniteThreshold,
    /// A bound the operator reads was not supplied.
    #[error("operator requires a threshold that was not supplied")]
    MissingThreshold,
    /// The weight is negative or not finite.
    #[error("weight {weight} must be finite and non-negative")]
    InvalidWeight {
        /// The rejected weight.
        weight: f64,
    },
    /// Another rule in the same set already targets this variable.
    #[error("variable appears more than once in the rule set")]
    DuplicateVariable,
}

/// Errors returned while validating rules or computing a score.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// Malformed threshold/operator combination or unknown names.
    #[error("invalid rule for '{variable}': {defect}")]
    InvalidRule {
        /// Variable name as supplied by the caller.
        variable: String,
        /// What is wrong with the rule.
        defect: RuleDefect,
    },
    /// Scoring was requested against a deactivated sport.
    #[error("rule set for sport '{sport_id}' is inactive")]
    InactiveRuleSet {
        /// Sport whose rule set is inactive.
        sport_id: SportId,
    },
    /// The sample lacks a reading required by a configured rule.
    #[error("weather sample has no reading for '{variable}'")]
    MissingVariable {
        /// The absent reading.
        variable: WeatherVariable,
    },
    /// No rules are configured for the sport.
    #[error("rule set for sport '{sport_id}' has no rules")]
    EmptyRuleSet {
        /// Sport without rules.
        sport_id: SportId,
    },
    /// Every rule weight is zero, leaving the weighted average undefined.
    #[error("rule weights for sport '{sport_id}' sum to zero")]
    ZeroTotalWeight {
        /// Sport whose weights cancel out.
        sport_id: SportId,
    },
}

impl ScoringError {
    /// Build an [`ScoringError::InvalidRule`] for a known variable.
    pub fn invalid_rule(variable: WeatherVariable, defect: RuleDefect) -> Self {
        Self::InvalidRule {
            variable: variable.as_str().to_owned(),
            defect,
        }
    }
}

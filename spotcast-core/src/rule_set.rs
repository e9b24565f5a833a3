//! Per-sport rule sets authored through admin configuration.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::{RuleDefect, ScoringError, VariableRule};

/// Identifier of a sport as issued by the admin configuration.
///
/// # Examples
/// ```
/// use spotcast_core::SportId;
///
/// # fn main() -> Result<(), spotcast_core::SportIdError> {
/// let id = SportId::new(" kite ")?;
/// assert_eq!(id.as_str(), "kite");
/// assert!(SportId::new("   ").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SportId(String);

/// Errors returned by [`SportId::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SportIdError {
    /// The identifier was empty or whitespace.
    #[error("sport id must not be empty")]
    Empty,
}

impl SportId {
    /// Validate and construct an identifier, trimming surrounding whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, SportIdError> {
        let raw = id.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SportIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SportId {
    type Error = SportIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SportId> for String {
    fn from(id: SportId) -> Self {
        id.0
    }
}

/// The thresholds defining which weather suits a sport.
///
/// Rules keep their configured order and each targets a distinct variable.
/// Rule sets are toggled active or inactive, never deleted.
///
/// # Examples
/// ```
/// use spotcast_core::{SportId, SportRuleSet, VariableRule, WeatherVariable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let wind = VariableRule::between(WeatherVariable::WindSpeed, 8.0, 14.0, 1.0)?;
/// let mut kite = SportRuleSet::new(SportId::new("kite")?, "Kitesurf", vec![wind])?;
/// assert!(kite.is_active());
/// kite.deactivate();
/// assert!(!kite.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SportRuleSet {
    sport_id: SportId,
    sport_name: String,
    description: String,
    active: bool,
    rules: Vec<VariableRule>,
}

impl SportRuleSet {
    /// Validate and construct an active rule set with an empty description.
    ///
    /// An empty rule list is accepted here; scoring reports it as
    /// [`ScoringError::EmptyRuleSet`].
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidRule`] when a rule is malformed or when
    /// two rules target the same variable.
    pub fn new(
        sport_id: SportId,
        sport_name: impl Into<String>,
        rules: Vec<VariableRule>,
    ) -> Result<Self, ScoringError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            rule.validate()?;
            if !seen.insert(rule.variable) {
                return Err(ScoringError::invalid_rule(
                    rule.variable,
                    RuleDefect::DuplicateVariable,
                ));
            }
        }
        Ok(Self {
            sport_id,
            sport_name: sport_name.into(),
            description: String::new(),
            active: true,
            rules,
        })
    }

    /// Attach a description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the active flag while returning `self` for chaining.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Identifier of the sport.
    pub const fn sport_id(&self) -> &SportId {
        &self.sport_id
    }

    /// Human-readable sport name.
    pub fn sport_name(&self) -> &str {
        &self.sport_name
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the sport may be scored.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Rules in configured order.
    pub fn rules(&self) -> &[VariableRule] {
        &self.rules
    }

    /// Mark the sport as available for scoring.
    pub const fn activate(&mut self) {
        self.active = true;
    }

    /// Withdraw the sport from scoring without discarding its rules.
    pub const fn deactivate(&mut self) {
        self.active = false;
    }
}

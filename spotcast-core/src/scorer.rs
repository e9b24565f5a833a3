//! Score a weather sample against a sport's rule set.
//!
//! The `Scorer` trait turns a [`WeatherSample`](crate::WeatherSample) and a
//! [`SportRuleSet`](crate::SportRuleSet) into a [`Score`](crate::Score).

use crate::{Score, ScoringError, SportRuleSet, WeatherSample};

/// Calculate a suitability score for a sample under a sport's rules.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so many
/// (spot, sport, day) triples can be scored in parallel. Scoring is pure:
/// the same inputs always produce the same result.
///
/// Implementations must reject inactive or empty rule sets instead of
/// inventing a score, and report absent readings as
/// [`ScoringError::MissingVariable`].
///
/// # Examples
///
/// ```rust
/// use spotcast_core::{Score, Scorer, ScoringError, SportRuleSet, WeatherSample};
///
/// struct Perfect;
///
/// impl Scorer for Perfect {
///     fn score(&self, _sample: &WeatherSample, rules: &SportRuleSet) -> Result<Score, ScoringError> {
///         if !rules.is_active() {
///             return Err(ScoringError::InactiveRuleSet { sport_id: rules.sport_id().clone() });
///         }
///         Ok(Score::new(100.0))
///     }
/// }
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score of `sample` according to `rules`.
    ///
    /// # Errors
    /// Returns a [`ScoringError`] when the rule set cannot be applied to the
    /// sample.
    fn score(&self, sample: &WeatherSample, rules: &SportRuleSet) -> Result<Score, ScoringError>;
}

//! Suitability scores and their qualitative labels.

use std::fmt;

/// Upper bound of the score scale.
pub const MAX_SCORE: f64 = 100.0;

const EXCELENTE_FROM: f64 = 75.0;
const BUENO_FROM: f64 = 50.0;
const REGULAR_FROM: f64 = 25.0;

/// Qualitative band of a [`Score`].
///
/// # Examples
/// ```
/// use spotcast_core::ScoreLabel;
///
/// assert_eq!(ScoreLabel::from_value(75.0), ScoreLabel::Excelente);
/// assert_eq!(ScoreLabel::from_value(74.99), ScoreLabel::Bueno);
/// assert_eq!(ScoreLabel::Regular.as_str(), "Regular");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreLabel {
    /// 75 and above.
    Excelente,
    /// From 50 up to 75.
    Bueno,
    /// From 25 up to 50.
    Regular,
    /// Below 25.
    Pobre,
}

impl ScoreLabel {
    /// Band a numeric score.
    pub fn from_value(value: f64) -> Self {
        if value >= EXCELENTE_FROM {
            Self::Excelente
        } else if value >= BUENO_FROM {
            Self::Bueno
        } else if value >= REGULAR_FROM {
            Self::Regular
        } else {
            Self::Pobre
        }
    }

    /// Display label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excelente => "Excelente",
            Self::Bueno => "Bueno",
            Self::Regular => "Regular",
            Self::Pobre => "Pobre",
        }
    }

    /// Badge colour as a hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excelente => "#10b981",
            Self::Bueno => "#f59e0b",
            Self::Regular => "#f97316",
            Self::Pobre => "#ef4444",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suitability score in `0.0..=100.0` with its derived label.
///
/// Scores are ephemeral: recompute them from a sample and a rule set rather
/// than persisting them.
///
/// # Examples
/// ```
/// use spotcast_core::{Score, ScoreLabel};
///
/// let score = Score::new(130.0);
/// assert_eq!(score.value(), 100.0);
/// assert_eq!(score.label(), ScoreLabel::Excelente);
/// assert_eq!(Score::new(f64::NAN).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Score {
    value: f64,
    label: ScoreLabel,
}

impl Score {
    /// Sanitise a raw value and label it.
    ///
    /// Non-finite values become `0.0`; everything else is clamped into the
    /// score scale.
    pub fn new(value: f64) -> Self {
        let value = if value.is_finite() {
            value.clamp(0.0, MAX_SCORE)
        } else {
            0.0
        };
        Self {
            value,
            label: ScoreLabel::from_value(value),
        }
    }

    /// Numeric value in `0.0..=100.0`.
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Qualitative band.
    pub const fn label(&self) -> ScoreLabel {
        self.label
    }

    /// Presentation colour of the label.
    pub const fn color(&self) -> &'static str {
        self.label.color()
    }

    /// Value rounded to two decimals.
    pub fn rounded(&self) -> f64 {
        (self.value * 100.0).round() / 100.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}/100 ({})", self.value, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0, ScoreLabel::Excelente)]
    #[case(75.0, ScoreLabel::Excelente)]
    #[case(50.0, ScoreLabel::Bueno)]
    #[case(49.999, ScoreLabel::Regular)]
    #[case(25.0, ScoreLabel::Regular)]
    #[case(24.9, ScoreLabel::Pobre)]
    #[case(0.0, ScoreLabel::Pobre)]
    fn labels_follow_thresholds(#[case] value: f64, #[case] expected: ScoreLabel) {
        assert_eq!(Score::new(value).label(), expected);
    }

    #[rstest]
    #[case(-5.0, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(250.0, 100.0)]
    #[case(42.5, 42.5)]
    fn new_sanitises(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(Score::new(raw).value(), expected);
    }

    #[test]
    fn rounded_keeps_two_decimals() {
        assert_eq!(Score::new(66.666_666).rounded(), 66.67);
    }

    #[test]
    fn display_shows_badge_text() {
        assert_eq!(Score::new(80.4).to_string(), "80/100 (Excelente)");
    }

    #[test]
    fn colours_are_distinct() {
        let colours = [
            ScoreLabel::Excelente.color(),
            ScoreLabel::Bueno.color(),
            ScoreLabel::Regular.color(),
            ScoreLabel::Pobre.color(),
        ];
        let unique: std::collections::HashSet<_> = colours.iter().collect();
        assert_eq!(unique.len(), colours.len());
    }
}

//! Coarse three-tier aptitude labels used to colour map markers.

use std::fmt;
use std::str::FromStr;

/// Quick-glance suitability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Aptitude {
    /// Conditions clearly suit the sport.
    Excelente,
    /// Conditions are usable.
    Bueno,
    /// Conditions do not suit the sport.
    Malo,
}

impl Aptitude {
    /// Lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excelente => "excelente",
            Self::Bueno => "bueno",
            Self::Malo => "malo",
        }
    }

    /// Marker colour as a hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excelente => "#16a34a",
            Self::Bueno => "#f59e0b",
            Self::Malo => "#dc2626",
        }
    }
}

impl fmt::Display for Aptitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sports the aptitude heuristic knows how to rate.
///
/// # Examples
/// ```
/// use spotcast_core::AptitudeSport;
///
/// assert_eq!("Kitesurf".parse::<AptitudeSport>(), Ok(AptitudeSport::Kite));
/// assert_eq!(AptitudeSport::Surf.to_string(), "surf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AptitudeSport {
    /// Wave riding; wants swell and little wind.
    Surf,
    /// Kitesurfing; wants moderate steady wind.
    Kite,
}

impl AptitudeSport {
    /// Lowercase tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Surf => "surf",
            Self::Kite => "kite",
        }
    }

    /// Choose the sport used to rate a spot.
    ///
    /// A single selected sport wins when the spot offers it; otherwise the
    /// spot's first offered sport is used, falling back to surf.
    ///
    /// # Examples
    /// ```
    /// use spotcast_core::AptitudeSport;
    ///
    /// let offered = [AptitudeSport::Surf, AptitudeSport::Kite];
    /// assert_eq!(AptitudeSport::pick(&[AptitudeSport::Kite], &offered), AptitudeSport::Kite);
    /// assert_eq!(AptitudeSport::pick(&[], &[]), AptitudeSport::Surf);
    /// ```
    pub fn pick(selected: &[Self], offered: &[Self]) -> Self {
        if let [only] = selected
            && offered.contains(only)
        {
            return *only;
        }
        offered.first().copied().unwrap_or(Self::Surf)
    }
}

impl fmt::Display for AptitudeSport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AptitudeSport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "surf" => Ok(Self::Surf),
            "kite" | "kitesurf" => Ok(Self::Kite),
            _ => Err(format!("unknown aptitude sport '{s}'")),
        }
    }
}

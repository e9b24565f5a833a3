//! Weather variables carried by a [`WeatherSample`](crate::WeatherSample).
//!
//! The enum is the canonical internal schema. Upstream payloads use several
//! spellings for the same reading; those aliases are resolved at the system
//! boundary (see the `spotcast-data` crate), never here.
//!
//! # Examples
//! ```
//! use spotcast_core::WeatherVariable;
//!
//! assert_eq!(WeatherVariable::WaveHeight.as_str(), "wave_height");
//! assert_eq!(
//!     "wind_gust_value".parse::<WeatherVariable>(),
//!     Ok(WeatherVariable::WindGust)
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single environmental reading a rule can be evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WeatherVariable {
    /// Mean wind speed at 10 m, km/h.
    WindSpeed,
    /// Maximum gust, km/h.
    WindGust,
    /// Significant wave height, metres.
    WaveHeight,
    /// Peak wave period, seconds.
    WavePeriod,
    /// Sea surface temperature, °C.
    WaterTemperature,
    /// Minimum air temperature, °C.
    AirTemperatureMin,
    /// Maximum air temperature, °C.
    AirTemperatureMax,
    /// Minimum apparent temperature, °C.
    FeelsLikeTemperatureMin,
    /// Maximum apparent temperature, °C.
    FeelsLikeTemperatureMax,
    /// Cloud cover, percent.
    CloudCover,
    /// Probability of precipitation, percent.
    PrecipitationProbability,
    /// Precipitation quantity, millimetres.
    PrecipitationQuantity,
    /// UV index.
    UvIndex,
}

impl WeatherVariable {
    /// Every variable, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::WindSpeed,
        Self::WindGust,
        Self::WaveHeight,
        Self::WavePeriod,
        Self::WaterTemperature,
        Self::AirTemperatureMin,
        Self::AirTemperatureMax,
        Self::FeelsLikeTemperatureMin,
        Self::FeelsLikeTemperatureMax,
        Self::CloudCover,
        Self::PrecipitationProbability,
        Self::PrecipitationQuantity,
        Self::UvIndex,
    ];

    /// Return the canonical snake-case name.
    ///
    /// # Examples
    /// ```
    /// use spotcast_core::WeatherVariable;
    ///
    /// assert_eq!(WeatherVariable::UvIndex.as_str(), "uv_index");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WindSpeed => "wind_speed",
            Self::WindGust => "wind_gust",
            Self::WaveHeight => "wave_height",
            Self::WavePeriod => "wave_period",
            Self::WaterTemperature => "water_temperature",
            Self::AirTemperatureMin => "air_temperature_min",
            Self::AirTemperatureMax => "air_temperature_max",
            Self::FeelsLikeTemperatureMin => "feels_like_temperature_min",
            Self::FeelsLikeTemperatureMax => "feels_like_temperature_max",
            Self::CloudCover => "cloud_cover",
            Self::PrecipitationProbability => "precipitation_probability",
            Self::PrecipitationQuantity => "precipitation_quantity",
            Self::UvIndex => "uv_index",
        }
    }
}

impl fmt::Display for WeatherVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name is not one of the enumerated weather variables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weather variable '{name}'")]
pub struct UnknownVariable {
    /// The rejected name.
    pub name: String,
}

impl FromStr for WeatherVariable {
    type Err = UnknownVariable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Rule sets name the gust reading `wind_gust_value`.
        if s == "wind_gust_value" {
            return Ok(Self::WindGust);
        }
        Self::ALL
            .into_iter()
            .find(|variable| variable.as_str() == s)
            .ok_or_else(|| UnknownVariable { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_variable_round_trips_through_its_name() {
        for variable in WeatherVariable::ALL {
            assert_eq!(variable.as_str().parse::<WeatherVariable>(), Ok(variable));
        }
    }

    #[rstest]
    #[case("waveHeight")]
    #[case("WIND_SPEED")]
    #[case("")]
    fn parsing_rejects_non_canonical_names(#[case] name: &str) {
        let err = name.parse::<WeatherVariable>().unwrap_err();
        assert_eq!(err.name, name);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(WeatherVariable::CloudCover.to_string(), "cloud_cover");
    }
}

//! Map upstream variable names onto the canonical schema.
//!
//! Weather providers and the admin backend disagree on naming: the same
//! reading arrives as `waveHeight` from one endpoint and `wave_height`
//! from another. Every name the adapters accept is listed
//! here so the scoring core only ever sees [`WeatherVariable`].

use spotcast_core::WeatherVariable;

const ALIASES: &[(&str, WeatherVariable)] = &[
    ("wind_speed_10m", WeatherVariable::WindSpeed),
    ("windSpeed", WeatherVariable::WindSpeed),
    ("wind_gustValue", WeatherVariable::WindGust),
    ("wind_gusts_10m", WeatherVariable::WindGust),
    ("windGust", WeatherVariable::WindGust),
    ("waveHeight", WeatherVariable::WaveHeight),
    ("wavePeriod", WeatherVariable::WavePeriod),
    ("waterTemperature", WeatherVariable::WaterTemperature),
    ("minTemperature", WeatherVariable::AirTemperatureMin),
    ("maxTemperature", WeatherVariable::AirTemperatureMax),
    ("temperature_2m_min", WeatherVariable::AirTemperatureMin),
    ("temperature_2m_max", WeatherVariable::AirTemperatureMax),
    ("feelsLikeMinTemperature", WeatherVariable::FeelsLikeTemperatureMin),
    ("feelsLikeMaxTemperature", WeatherVariable::FeelsLikeTemperatureMax),
    ("cloudCover", WeatherVariable::CloudCover),
    ("cloud_cover_percent", WeatherVariable::CloudCover),
    ("precipitationProbability", WeatherVariable::PrecipitationProbability),
    ("precipitation_qpfCuantity", WeatherVariable::PrecipitationQuantity),
    ("precipitation_qpfQuantity", WeatherVariable::PrecipitationQuantity),
    ("precipitation", WeatherVariable::PrecipitationQuantity),
    ("uvIndex", WeatherVariable::UvIndex),
];

/// Resolve a canonical or upstream variable name.
///
/// Canonical names resolve first; aliases are matched exactly, as upstream
/// payloads are case-sensitive.
///
/// # Examples
/// ```
/// use spotcast_core::WeatherVariable;
/// use spotcast_data::resolve_variable;
///
/// assert_eq!(resolve_variable("waveHeight"), Some(WeatherVariable::WaveHeight));
/// assert_eq!(resolve_variable("wind_gustValue"), Some(WeatherVariable::WindGust));
/// assert_eq!(resolve_variable("humidity"), None);
/// ```
pub fn resolve_variable(name: &str) -> Option<WeatherVariable> {
    let trimmed = name.trim();
    trimmed.parse().ok().or_else(|| {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == trimmed)
            .map(|&(_, variable)| variable)
    })
}

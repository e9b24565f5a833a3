//! Normalised weather snapshot for one spot on one day.

use crate::WeatherVariable;

/// Environmental readings for a (location, day) pair.
///
/// Every reading is optional: `None` records that the provider did not
/// report the variable. Scoring treats an absent reading required by a rule
/// as an error rather than guessing a value.
///
/// # Examples
/// ```
/// use spotcast_core::{WeatherSample, WeatherVariable};
///
/// let sample = WeatherSample::new()
///     .with(WeatherVariable::WindSpeed, 10.0)
///     .with(WeatherVariable::WaveHeight, 0.0);
/// assert_eq!(sample.value(WeatherVariable::WindSpeed), Some(10.0));
/// assert_eq!(sample.value(WeatherVariable::UvIndex), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct WeatherSample {
    wind_speed: Option<f64>,
    wind_gust: Option<f64>,
    wave_height: Option<f64>,
    wave_period: Option<f64>,
    water_temperature: Option<f64>,
    air_temperature_min: Option<f64>,
    air_temperature_max: Option<f64>,
    feels_like_temperature_min: Option<f64>,
    feels_like_temperature_max: Option<f64>,
    cloud_cover: Option<f64>,
    precipitation_probability: Option<f64>,
    precipitation_quantity: Option<f64>,
    uv_index: Option<f64>,
}

impl WeatherSample {
    /// Construct a sample with no readings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the reading for `variable`, if reported.
    pub const fn value(&self, variable: WeatherVariable) -> Option<f64> {
        match variable {
            WeatherVariable::WindSpeed => self.wind_speed,
            WeatherVariable::WindGust => self.wind_gust,
            WeatherVariable::WaveHeight => self.wave_height,
            WeatherVariable::WavePeriod => self.wave_period,
            WeatherVariable::WaterTemperature => self.water_temperature,
            WeatherVariable::AirTemperatureMin => self.air_temperature_min,
            WeatherVariable::AirTemperatureMax => self.air_temperature_max,
            WeatherVariable::FeelsLikeTemperatureMin => self.feels_like_temperature_min,
            WeatherVariable::FeelsLikeTemperatureMax => self.feels_like_temperature_max,
            WeatherVariable::CloudCover => self.cloud_cover,
            WeatherVariable::PrecipitationProbability => self.precipitation_probability,
            WeatherVariable::PrecipitationQuantity => self.precipitation_quantity,
            WeatherVariable::UvIndex => self.uv_index,
        }
    }

    /// Insert, replace or clear a reading.
    pub fn set(&mut self, variable: WeatherVariable, value: Option<f64>) {
        let slot = match variable {
            WeatherVariable::WindSpeed => &mut self.wind_speed,
            WeatherVariable::WindGust => &mut self.wind_gust,
            WeatherVariable::WaveHeight => &mut self.wave_height,
            WeatherVariable::WavePeriod => &mut self.wave_period,
            WeatherVariable::WaterTemperature => &mut self.water_temperature,
            WeatherVariable::AirTemperatureMin => &mut self.air_temperature_min,
            WeatherVariable::AirTemperatureMax => &mut self.air_temperature_max,
            WeatherVariable::FeelsLikeTemperatureMin => &mut self.feels_like_temperature_min,
            WeatherVariable::FeelsLikeTemperatureMax => &mut self.feels_like_temperature_max,
            WeatherVariable::CloudCover => &mut self.cloud_cover,
            WeatherVariable::PrecipitationProbability => &mut self.precipitation_probability,
            WeatherVariable::PrecipitationQuantity => &mut self.precipitation_quantity,
            WeatherVariable::UvIndex => &mut self.uv_index,
        };
        *slot = value;
    }

    /// Add a reading while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, variable: WeatherVariable, value: f64) -> Self {
        self.set(variable, Some(value));
        self
    }

    /// Iterate over the reported readings in variable order.
    pub fn readings(&self) -> impl Iterator<Item = (WeatherVariable, f64)> + '_ {
        WeatherVariable::ALL
            .into_iter()
            .filter_map(|variable| self.value(variable).map(|value| (variable, value)))
    }

    /// Report whether no reading is present.
    pub fn is_empty(&self) -> bool {
        self.readings().next().is_none()
    }
}

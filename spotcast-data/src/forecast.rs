//! Join a daily weather forecast with hourly marine readings.
//!
//! The daily document follows the shape of a forecast API that reports one
//! `forecastDays` entry per calendar day with nested wind, precipitation and
//! temperature objects. The marine document reports `hours` keyed by an
//! ISO-8601 `time`, each reading nested under the source that produced it
//! (`waveHeight.sg`). Marine hours are averaged per calendar date before the
//! join.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize, Serializer};
use spotcast_core::{WeatherSample, WeatherVariable};

use crate::DataError;

const DAILY_DOCUMENT: &str = "daily forecast";
const MARINE_DOCUMENT: &str = "marine forecast";

/// A calendar date as reported by the forecast providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ForecastDate {
    year: i32,
    month: u8,
    day: u8,
}

impl ForecastDate {
    /// Build a date, returning `None` for an impossible month or day.
    ///
    /// Days are only checked against `1..=31`; providers never report the
    /// 31st of a short month.
    #[must_use]
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some(Self { year, month, day })
    }

    /// Calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, starting at 1.
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, starting at 1.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for ForecastDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for ForecastDate {
    type Err = DataError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DataError::InvalidDate { text: s.to_owned() };
        let mut parts = s.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        let day = day.parse().map_err(|_| invalid())?;
        Self::new(year, month, day).ok_or_else(invalid)
    }
}

impl Serialize for ForecastDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One day of merged forecast data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    /// Calendar date of the forecast.
    pub date: ForecastDate,
    /// Daily readings with marine averages folded in.
    pub sample: WeatherSample,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyDocument {
    #[serde(default)]
    forecast_days: Vec<DailyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyEntry {
    display_date: Option<DisplayDate>,
    daytime_forecast: Option<Daytime>,
    max_temperature: Option<Degrees>,
    min_temperature: Option<Degrees>,
    feels_like_max_temperature: Option<Degrees>,
    feels_like_min_temperature: Option<Degrees>,
}

#[derive(Debug, Deserialize)]
struct DisplayDate {
    year: Option<i32>,
    month: Option<u8>,
    day: Option<u8>,
}

impl DisplayDate {
    fn to_date(&self) -> Option<ForecastDate> {
        ForecastDate::new(self.year?, self.month?, self.day?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Daytime {
    uv_index: Option<f64>,
    cloud_cover: Option<f64>,
    precipitation: Option<Precipitation>,
    wind: Option<Wind>,
}

#[derive(Debug, Deserialize)]
struct Precipitation {
    probability: Option<Percent>,
    qpf: Option<Quantity>,
}

#[derive(Debug, Deserialize)]
struct Percent {
    percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Quantity {
    quantity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: Option<Magnitude>,
    gust: Option<Magnitude>,
}

#[derive(Debug, Deserialize)]
struct Magnitude {
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Degrees {
    degrees: Option<f64>,
}

fn degrees(reading: Option<&Degrees>) -> Option<f64> {
    reading.and_then(|temperature| temperature.degrees)
}

impl Daytime {
    fn apply(&self, sample: &mut WeatherSample) {
        let precipitation = self.precipitation.as_ref();
        let wind = self.wind.as_ref();
        sample.set(WeatherVariable::UvIndex, self.uv_index);
        sample.set(WeatherVariable::CloudCover, self.cloud_cover);
        sample.set(
            WeatherVariable::PrecipitationProbability,
            precipitation
                .and_then(|rain| rain.probability.as_ref())
                .and_then(|probability| probability.percent),
        );
        sample.set(
            WeatherVariable::PrecipitationQuantity,
            precipitation
                .and_then(|rain| rain.qpf.as_ref())
                .and_then(|qpf| qpf.quantity),
        );
        sample.set(
            WeatherVariable::WindSpeed,
            wind.and_then(|w| w.speed.as_ref()).and_then(|speed| speed.value),
        );
        sample.set(
            WeatherVariable::WindGust,
            wind.and_then(|w| w.gust.as_ref()).and_then(|gust| gust.value),
        );
    }
}

impl DailyEntry {
    fn to_sample(&self) -> WeatherSample {
        let mut sample = WeatherSample::new();
        if let Some(daytime) = &self.daytime_forecast {
            daytime.apply(&mut sample);
        }
        sample.set(
            WeatherVariable::AirTemperatureMax,
            degrees(self.max_temperature.as_ref()),
        );
        sample.set(
            WeatherVariable::AirTemperatureMin,
            degrees(self.min_temperature.as_ref()),
        );
        sample.set(
            WeatherVariable::FeelsLikeTemperatureMax,
            degrees(self.feels_like_max_temperature.as_ref()),
        );
        sample.set(
            WeatherVariable::FeelsLikeTemperatureMin,
            degrees(self.feels_like_min_temperature.as_ref()),
        );
        sample
    }
}

#[derive(Debug, Deserialize)]
struct MarineDocument {
    #[serde(default)]
    hours: Vec<MarineHour>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarineHour {
    time: Option<String>,
    wave_height: Option<SourceReading>,
    wave_period: Option<SourceReading>,
    water_temperature: Option<SourceReading>,
}

#[derive(Debug, Deserialize)]
struct SourceReading {
    sg: Option<f64>,
}

impl MarineHour {
    fn date(&self) -> Option<ForecastDate> {
        let time = self.time.as_deref()?;
        let day = time.split_once('T').map_or(time, |(day, _)| day);
        day.parse().ok()
    }

    fn readings(&self) -> [(WeatherVariable, Option<f64>); 3] {
        let sg = |reading: &Option<SourceReading>| reading.as_ref().and_then(|r| r.sg);
        [
            (WeatherVariable::WaveHeight, sg(&self.wave_height)),
            (WeatherVariable::WavePeriod, sg(&self.wave_period)),
            (WeatherVariable::WaterTemperature, sg(&self.water_temperature)),
        ]
    }
}

/// Running mean of the readings seen for one variable.
#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    total: f64,
    count: u32,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.total += value;
        self.count += 1;
    }

    fn value(self) -> Option<f64> {
        (self.count > 0).then(|| self.total / f64::from(self.count))
    }
}

type MarineAverages = BTreeMap<ForecastDate, BTreeMap<WeatherVariable, Mean>>;

fn average_marine_hours(hours: &[MarineHour]) -> MarineAverages {
    let mut averages = MarineAverages::new();
    for hour in hours {
        let Some(date) = hour.date() else {
            warn!("skipping marine hour without a parseable time: {:?}", hour.time);
            continue;
        };
        let day = averages.entry(date).or_default();
        for (variable, reading) in hour.readings() {
            if let Some(value) = reading.filter(|value| value.is_finite()) {
                day.entry(variable).or_default().push(value);
            }
        }
    }
    averages
}

/// Merge a daily forecast with hourly marine readings.
///
/// Returns one [`ForecastDay`] per daily entry, in document order. Wave
/// height, wave period and water temperature are the mean of the marine
/// hours falling on the same date; readings either document omits stay
/// absent rather than defaulting to zero.
///
/// # Errors
/// Returns [`DataError::Json`] when either document is malformed.
///
/// # Examples
/// ```
/// use spotcast_core::WeatherVariable;
/// use spotcast_data::merge_forecast;
///
/// let daily = r#"{"forecastDays": [{
///     "displayDate": {"year": 2025, "month": 1, "day": 7},
///     "daytimeForecast": {"wind": {"speed": {"value": 14}}}
/// }]}"#;
/// let marine = r#"{"hours": [
///     {"time": "2025-01-07T09:00:00+00:00", "waveHeight": {"sg": 1.0}},
///     {"time": "2025-01-07T15:00:00+00:00", "waveHeight": {"sg": 2.0}}
/// ]}"#;
/// let days = merge_forecast(daily, marine)?;
/// assert_eq!(days[0].date.to_string(), "2025-01-07");
/// assert_eq!(days[0].sample.value(WeatherVariable::WaveHeight), Some(1.5));
/// assert_eq!(days[0].sample.value(WeatherVariable::WindSpeed), Some(14.0));
/// # Ok::<(), spotcast_data::DataError>(())
/// ```
pub fn merge_forecast(daily_json: &str, marine_json: &str) -> Result<Vec<ForecastDay>, DataError> {
    let daily: DailyDocument = serde_json::from_str(daily_json)
        .map_err(|source| DataError::json(DAILY_DOCUMENT, source))?;
    let marine: MarineDocument = serde_json::from_str(marine_json)
        .map_err(|source| DataError::json(MARINE_DOCUMENT, source))?;
    let averages = average_marine_hours(&marine.hours);

    let mut days = Vec::with_capacity(daily.forecast_days.len());
    for entry in &daily.forecast_days {
        let Some(date) = entry.display_date.as_ref().and_then(DisplayDate::to_date) else {
            warn!("skipping forecast day without a valid display date");
            continue;
        };
        let mut sample = entry.to_sample();
        if let Some(day) = averages.get(&date) {
            for (&variable, mean) in day {
                sample.set(variable, mean.value());
            }
        }
        days.push(ForecastDay { date, sample });
    }
    Ok(days)
}

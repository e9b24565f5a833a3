//! Coarse aptitude heuristic for colouring map markers.
//!
//! Unlike the weighted scorer, the classifier never fails: absent or
//! non-finite readings count as `0.0`.

use spotcast_core::{Aptitude, AptitudeSport, WeatherSample, WeatherVariable};

/// Raw readings the classifier looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AptitudeReadings {
    /// Wind speed.
    pub wind_speed: Option<f64>,
    /// Significant wave height.
    pub wave_height: Option<f64>,
    /// Precipitation quantity.
    pub precipitation: Option<f64>,
}

impl AptitudeReadings {
    /// Take the classifier inputs from a full sample.
    #[must_use]
    pub const fn from_sample(sample: &WeatherSample) -> Self {
        Self {
            wind_speed: sample.value(WeatherVariable::WindSpeed),
            wave_height: sample.value(WeatherVariable::WaveHeight),
            precipitation: sample.value(WeatherVariable::PrecipitationQuantity),
        }
    }
}

fn or_zero(reading: Option<f64>) -> f64 {
    reading.filter(|value| value.is_finite()).unwrap_or(0.0)
}

/// Label how well the readings suit `sport`.
///
/// # Examples
/// ```
/// use spotcast_core::{Aptitude, AptitudeSport};
/// use spotcast_scorer::{AptitudeReadings, classify};
///
/// let readings = AptitudeReadings {
///     wind_speed: Some(7.0),
///     wave_height: Some(1.2),
///     precipitation: Some(1.0),
/// };
/// assert_eq!(classify(AptitudeSport::Surf, readings), Aptitude::Excelente);
/// ```
#[must_use]
pub fn classify(sport: AptitudeSport, readings: AptitudeReadings) -> Aptitude {
    let wind = or_zero(readings.wind_speed);
    let wave = or_zero(readings.wave_height);
    let rain = or_zero(readings.precipitation);
    match sport {
        AptitudeSport::Surf => {
            if wave >= 1.2 && wind < 8.0 && rain < 2.0 {
                Aptitude::Excelente
            } else if wave >= 0.7 && wind < 12.0 && rain < 4.0 {
                Aptitude::Bueno
            } else {
                Aptitude::Malo
            }
        }
        AptitudeSport::Kite => {
            if (8.0..=14.0).contains(&wind) && rain < 2.0 {
                Aptitude::Excelente
            } else if wind >= 6.0 && rain < 4.0 {
                Aptitude::Bueno
            } else {
                Aptitude::Malo
            }
        }
    }
}

/// Classify using the wind, wave and precipitation readings of `sample`.
#[must_use]
pub fn classify_sample(sport: AptitudeSport, sample: &WeatherSample) -> Aptitude {
    classify(sport, AptitudeReadings::from_sample(sample))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn readings(wind: f64, wave: f64, rain: f64) -> AptitudeReadings {
        AptitudeReadings {
            wind_speed: Some(wind),
            wave_height: Some(wave),
            precipitation: Some(rain),
        }
    }

    #[rstest]
    #[case(readings(7.0, 1.2, 1.0), Aptitude::Excelente)]
    #[case(readings(7.0, 1.19, 1.0), Aptitude::Bueno)]
    #[case(readings(8.0, 1.5, 1.0), Aptitude::Bueno)]
    #[case(readings(11.9, 0.7, 3.9), Aptitude::Bueno)]
    #[case(readings(12.0, 0.7, 1.0), Aptitude::Malo)]
    #[case(readings(3.0, 0.69, 0.0), Aptitude::Malo)]
    fn surf_thresholds(#[case] input: AptitudeReadings, #[case] expected: Aptitude) {
        assert_eq!(classify(AptitudeSport::Surf, input), expected);
    }

    #[rstest]
    #[case(readings(8.0, 0.0, 0.0), Aptitude::Excelente)]
    #[case(readings(14.0, 0.0, 1.9), Aptitude::Excelente)]
    #[case(readings(14.1, 0.0, 0.0), Aptitude::Bueno)]
    #[case(readings(10.0, 0.0, 2.0), Aptitude::Bueno)]
    #[case(readings(6.0, 0.0, 3.9), Aptitude::Bueno)]
    #[case(readings(5.9, 0.0, 0.0), Aptitude::Malo)]
    #[case(readings(20.0, 0.0, 4.0), Aptitude::Malo)]
    fn kite_thresholds(#[case] input: AptitudeReadings, #[case] expected: Aptitude) {
        assert_eq!(classify(AptitudeSport::Kite, input), expected);
    }

    #[rstest]
    fn missing_readings_count_as_zero() {
        assert_eq!(
            classify(AptitudeSport::Kite, AptitudeReadings::default()),
            Aptitude::Malo
        );
        let windy = AptitudeReadings {
            wind_speed: Some(10.0),
            ..AptitudeReadings::default()
        };
        assert_eq!(classify(AptitudeSport::Kite, windy), Aptitude::Excelente);
    }

    #[rstest]
    fn non_finite_readings_count_as_zero() {
        let input = readings(f64::NAN, 1.5, f64::INFINITY);
        assert_eq!(classify(AptitudeSport::Surf, input), Aptitude::Excelente);
    }

    #[rstest]
    fn sample_uses_precipitation_quantity() {
        let sample = WeatherSample::new()
            .with(WeatherVariable::WindSpeed, 10.0)
            .with(WeatherVariable::PrecipitationProbability, 90.0)
            .with(WeatherVariable::PrecipitationQuantity, 5.0);
        assert_eq!(classify_sample(AptitudeSport::Kite, &sample), Aptitude::Malo);
    }
}

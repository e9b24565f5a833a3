//! Adapter for the backend's flat per-spot weather averages.

use log::debug;
use serde_json::Value;
use spotcast_core::{WeatherSample, WeatherVariable};

use crate::{DataError, resolve_variable};

const FLAT_DOCUMENT: &str = "flat weather";

/// Single air temperature reported in place of a daily range.
const POINT_TEMPERATURE: &str = "temperature_2m";

fn reading(field: &str, value: &Value) -> Result<Option<f64>, DataError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(number) => Ok(number.as_f64()),
        _ => Err(DataError::NonNumericReading {
            field: field.to_owned(),
        }),
    }
}

/// Parse a flat JSON object of readings into a [`WeatherSample`].
///
/// Keys are resolved through [`resolve_variable`]; `temperature_2m` fills
/// both ends of the air temperature range. Unknown keys are ignored and
/// `null` readings stay absent.
///
/// # Errors
/// Returns [`DataError::Json`] for malformed JSON,
/// [`DataError::NotAnObject`] when the document is not an object, and
/// [`DataError::NonNumericReading`] when a recognised key holds a string,
/// boolean, array or object.
///
/// # Examples
/// ```
/// use spotcast_core::WeatherVariable;
/// use spotcast_data::parse_flat_sample;
///
/// let sample = parse_flat_sample(
///     r#"{"wind_speed_10m": 11.5, "wave_height": 1.4, "precipitation": null, "temperature_2m": 21}"#,
/// )?;
/// assert_eq!(sample.value(WeatherVariable::WindSpeed), Some(11.5));
/// assert_eq!(sample.value(WeatherVariable::PrecipitationQuantity), None);
/// assert_eq!(sample.value(WeatherVariable::AirTemperatureMax), Some(21.0));
/// # Ok::<(), spotcast_data::DataError>(())
/// ```
pub fn parse_flat_sample(json: &str) -> Result<WeatherSample, DataError> {
    let document: Value =
        serde_json::from_str(json).map_err(|source| DataError::json(FLAT_DOCUMENT, source))?;
    let Value::Object(fields) = document else {
        return Err(DataError::NotAnObject);
    };
    let mut sample = WeatherSample::new();
    for (field, value) in &fields {
        if field == POINT_TEMPERATURE {
            let temperature = reading(field, value)?;
            sample.set(WeatherVariable::AirTemperatureMin, temperature);
            sample.set(WeatherVariable::AirTemperatureMax, temperature);
            continue;
        }
        match resolve_variable(field) {
            Some(variable) => sample.set(variable, reading(field, value)?),
            None => debug!("ignoring unrecognised weather field '{field}'"),
        }
    }
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn canonical_and_upstream_names_mix() {
        let sample = parse_flat_sample(
            r#"{"wind_speed": 9, "waveHeight": 1.1, "uv_index": 4, "station": "Mar del Plata"}"#,
        )
        .expect("valid payload");
        assert_eq!(sample.value(WeatherVariable::WindSpeed), Some(9.0));
        assert_eq!(sample.value(WeatherVariable::WaveHeight), Some(1.1));
        assert_eq!(sample.value(WeatherVariable::UvIndex), Some(4.0));
        assert_eq!(sample.readings().count(), 3);
    }

    #[rstest]
    fn absent_fields_stay_absent() {
        let sample = parse_flat_sample(r#"{"wave_height": 0.8}"#).expect("valid payload");
        assert_eq!(sample.value(WeatherVariable::WindSpeed), None);
        assert_eq!(sample.value(WeatherVariable::AirTemperatureMin), None);
    }

    #[rstest]
    fn empty_objects_give_empty_samples() {
        assert!(parse_flat_sample("{}").expect("valid payload").is_empty());
    }

    #[rstest]
    #[case("[1, 2]")]
    #[case("12.5")]
    #[case("null")]
    fn non_objects_are_rejected(#[case] json: &str) {
        assert!(matches!(
            parse_flat_sample(json),
            Err(DataError::NotAnObject)
        ));
    }

    #[rstest]
    #[case(r#"{"wind_speed_10m": "12"}"#, "wind_speed_10m")]
    #[case(r#"{"temperature_2m": [20]}"#, "temperature_2m")]
    fn non_numeric_readings_name_the_field(#[case] json: &str, #[case] expected: &str) {
        match parse_flat_sample(json) {
            Err(DataError::NonNumericReading { field }) => assert_eq!(field, expected),
            other => panic!("expected a non-numeric reading error, got {other:?}"),
        }
    }

    #[rstest]
    fn unknown_fields_may_hold_anything() {
        let sample = parse_flat_sample(r#"{"spot": {"id": 4}, "ok": true}"#).expect("valid payload");
        assert!(sample.is_empty());
    }
}

//! Fixture rule sets and samples shared by unit, behaviour and property
//! tests across the workspace.
//!
//! The seeded catalogue mirrors the three sports the admin backend ships
//! with out of the box.

use crate::{
    Operator, RuleCatalogue, ScoringError, SportId, SportIdError, SportRuleSet, VariableRule,
    WeatherSample, WeatherVariable,
};

use WeatherVariable::{
    AirTemperatureMax, AirTemperatureMin, CloudCover, FeelsLikeTemperatureMax,
    FeelsLikeTemperatureMin, PrecipitationProbability, PrecipitationQuantity, UvIndex,
    WaterTemperature, WavePeriod, WaveHeight, WindGust, WindSpeed,
};

type Seed = (WeatherVariable, Operator, f64, f64, f64);

const SHARED: [Seed; 8] = [
    (UvIndex, Operator::Between, 0.0, 9.0, 4.0),
    (PrecipitationProbability, Operator::Min, 0.0, 30.0, 6.0),
    (PrecipitationQuantity, Operator::Min, 0.0, 3.0, 6.0),
    (CloudCover, Operator::Min, 0.0, 80.0, 4.0),
    (AirTemperatureMax, Operator::Between, 18.0, 35.0, 5.0),
    (AirTemperatureMin, Operator::Between, 10.0, 30.0, 5.0),
    (FeelsLikeTemperatureMax, Operator::Between, 18.0, 38.0, 5.0),
    (FeelsLikeTemperatureMin, Operator::Between, 12.0, 30.0, 5.0),
];

const KITESURF: [Seed; 5] = [
    (WindSpeed, Operator::Between, 12.0, 25.0, 10.0),
    (WindGust, Operator::Between, 0.0, 35.0, 8.0),
    (WaterTemperature, Operator::Between, 15.0, 30.0, 6.0),
    (WaveHeight, Operator::Between, 0.0, 2.5, 8.0),
    (WavePeriod, Operator::Between, 6.0, 12.0, 7.0),
];

const SURF: [Seed; 5] = [
    (WindSpeed, Operator::Between, 0.0, 10.0, 4.0),
    (WindGust, Operator::Between, 0.0, 20.0, 5.0),
    (WaterTemperature, Operator::Between, 15.0, 30.0, 6.0),
    (WaveHeight, Operator::Max, 0.8, 3.0, 9.0),
    (WavePeriod, Operator::Between, 8.0, 16.0, 8.0),
];

const KAYAK: [Seed; 5] = [
    (WindSpeed, Operator::Min, 0.0, 10.0, 8.0),
    (WindGust, Operator::Min, 0.0, 15.0, 8.0),
    (WaterTemperature, Operator::Between, 15.0, 30.0, 6.0),
    (WaveHeight, Operator::Min, 0.0, 1.0, 8.0),
    (WavePeriod, Operator::Between, 0.0, 8.0, 2.0),
];

/// Errors raised while assembling fixtures.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// A fixture sport id was blank.
    #[error(transparent)]
    SportId(#[from] SportIdError),
    /// A fixture rule failed validation.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

fn seeded(id: &str, name: &str, sport_rules: &[Seed]) -> Result<SportRuleSet, FixtureError> {
    let rules = SHARED
        .iter()
        .chain(sport_rules)
        .map(|&(variable, operator, min, max, weight)| {
            VariableRule::new(variable, operator, min, max, weight)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SportRuleSet::new(SportId::new(id)?, name, rules)?)
}

/// Kite rule set with a single `between 8..=14` wind rule of weight 1.
///
/// # Errors
/// Never fails in practice; the signature propagates constructor errors.
pub fn kite_wind_window() -> Result<SportRuleSet, FixtureError> {
    let wind = VariableRule::between(WindSpeed, 8.0, 14.0, 1.0)?;
    Ok(SportRuleSet::new(SportId::new("kite")?, "Kitesurf", vec![wind])?)
}

/// Catalogue holding the default kitesurf, surf and kayak rule sets.
///
/// # Errors
/// Never fails in practice; the signature propagates constructor errors.
pub fn seeded_catalogue() -> Result<RuleCatalogue, FixtureError> {
    let sports = [
        seeded("kitesurf", "Kitesurf", &KITESURF)?,
        seeded("surf", "Surf", &SURF)?,
        seeded("kayak", "Kayak", &KAYAK)?,
    ];
    Ok(sports.into_iter().collect())
}

/// Mild summer day with light wind and a small swell; every variable set.
pub fn mild_summer_day() -> WeatherSample {
    WeatherSample::new()
        .with(WindSpeed, 6.0)
        .with(WindGust, 12.0)
        .with(WaveHeight, 0.6)
        .with(WavePeriod, 7.0)
        .with(WaterTemperature, 19.0)
        .with(AirTemperatureMin, 16.0)
        .with(AirTemperatureMax, 27.0)
        .with(FeelsLikeTemperatureMin, 17.0)
        .with(FeelsLikeTemperatureMax, 28.0)
        .with(CloudCover, 20.0)
        .with(PrecipitationProbability, 10.0)
        .with(PrecipitationQuantity, 0.0)
        .with(UvIndex, 6.0)
}

/// Windy day suited to kitesurfing; every variable set.
pub fn windy_day() -> WeatherSample {
    mild_summer_day()
        .with(WindSpeed, 18.0)
        .with(WindGust, 26.0)
        .with(WaveHeight, 1.4)
        .with(WavePeriod, 9.0)
}

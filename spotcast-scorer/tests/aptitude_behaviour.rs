//! Behavioural coverage for the aptitude heuristic.

use std::cell::{Cell, RefCell};

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use spotcast_core::{Aptitude, AptitudeSport};
use spotcast_scorer::{AptitudeReadings, classify};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    sport: Cell<AptitudeSport>,
    readings: Cell<AptitudeReadings>,
    aptitude: RefCell<Option<Aptitude>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        sport: Cell::new(AptitudeSport::Surf),
        readings: Cell::new(AptitudeReadings::default()),
        aptitude: RefCell::new(None),
    }
}

fn set(context: &TestContext, sport: AptitudeSport, readings: AptitudeReadings) {
    context.sport.set(sport);
    context.readings.set(readings);
}

#[given("surf readings of wind 7, waves 1.2 and rain 1")]
fn surf_at_threshold(context: &TestContext) {
    set(
        context,
        AptitudeSport::Surf,
        AptitudeReadings {
            wind_speed: Some(7.0),
            wave_height: Some(1.2),
            precipitation: Some(1.0),
        },
    );
}

#[given("surf readings of wind 7, waves 1.19 and rain 1")]
fn surf_below_threshold(context: &TestContext) {
    set(
        context,
        AptitudeSport::Surf,
        AptitudeReadings {
            wind_speed: Some(7.0),
            wave_height: Some(1.19),
            precipitation: Some(1.0),
        },
    );
}

#[given("kite readings of wind 10 and rain 4")]
fn kite_in_rain(context: &TestContext) {
    set(
        context,
        AptitudeSport::Kite,
        AptitudeReadings {
            wind_speed: Some(10.0),
            wave_height: None,
            precipitation: Some(4.0),
        },
    );
}

#[given("kite readings with nothing reported")]
fn kite_without_readings(context: &TestContext) {
    set(context, AptitudeSport::Kite, AptitudeReadings::default());
}

#[when("I classify the readings")]
fn classify_readings(context: &TestContext) {
    *context.aptitude.borrow_mut() = Some(classify(context.sport.get(), context.readings.get()));
}

#[then("the aptitude is excelente")]
fn is_excelente(context: &TestContext) {
    assert_eq!(*context.aptitude.borrow(), Some(Aptitude::Excelente));
}

#[then("the aptitude is bueno")]
fn is_bueno(context: &TestContext) {
    assert_eq!(*context.aptitude.borrow(), Some(Aptitude::Bueno));
}

#[then("the aptitude is malo")]
fn is_malo(context: &TestContext) {
    assert_eq!(*context.aptitude.borrow(), Some(Aptitude::Malo));
}

#[scenario(path = "tests/features/aptitude.feature", index = 0)]
fn surf_wave_threshold(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/aptitude.feature", index = 1)]
fn surf_below_wave_threshold(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/aptitude.feature", index = 2)]
fn kite_heavy_rain(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/aptitude.feature", index = 3)]
fn kite_nothing_reported(context: TestContext) {
    let _ = context;
}

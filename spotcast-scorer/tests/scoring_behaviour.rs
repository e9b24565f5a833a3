#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for weighted scoring and its fallback.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use spotcast_core::test_support::kite_wind_window;
use spotcast_core::{
    Aptitude, AptitudeSport, HardStep, Score, ScoreLabel, Scorer, ScoringError, SportId,
    SportRuleSet, WeatherSample, WeatherVariable,
};
use spotcast_scorer::{Assessment, WeightedScorer, assess};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    scorer: WeightedScorer<HardStep>,
    rules: RefCell<Option<SportRuleSet>>,
    sample: RefCell<WeatherSample>,
    outcome: RefCell<Option<Result<Score, ScoringError>>>,
    assessment: RefCell<Option<Assessment>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        scorer: WeightedScorer::new(HardStep),
        rules: RefCell::new(None),
        sample: RefCell::new(WeatherSample::new()),
        outcome: RefCell::new(None),
        assessment: RefCell::new(None),
    }
}

#[given("the kite rule set with a wind window between 8 and 14")]
fn kite_window(context: &TestContext) {
    *context.rules.borrow_mut() = Some(kite_wind_window().expect("kite fixture"));
}

#[given("a kite rule set without rules")]
fn empty_kite(context: &TestContext) {
    let id = SportId::new("kite").expect("valid id");
    let rules = SportRuleSet::new(id, "Kitesurf", Vec::new()).expect("empty list is accepted");
    *context.rules.borrow_mut() = Some(rules);
}

#[given("the rule set is deactivated")]
fn deactivate(context: &TestContext) {
    context
        .rules
        .borrow_mut()
        .as_mut()
        .expect("rule set configured")
        .deactivate();
}

fn set_sample(context: &TestContext, sample: WeatherSample) {
    *context.sample.borrow_mut() = sample;
}

#[given("a sample with wind speed 10 and wave height 0")]
fn calm_wind(context: &TestContext) {
    set_sample(
        context,
        WeatherSample::new()
            .with(WeatherVariable::WindSpeed, 10.0)
            .with(WeatherVariable::WaveHeight, 0.0),
    );
}

#[given("a sample with wind speed 20 and wave height 0")]
fn strong_wind(context: &TestContext) {
    set_sample(
        context,
        WeatherSample::new()
            .with(WeatherVariable::WindSpeed, 20.0)
            .with(WeatherVariable::WaveHeight, 0.0),
    );
}

#[given("a sample with only a wave height of 1.5")]
fn waves_only(context: &TestContext) {
    set_sample(
        context,
        WeatherSample::new().with(WeatherVariable::WaveHeight, 1.5),
    );
}

#[when("I score the sample")]
fn score_sample(context: &TestContext) {
    let rules = context.rules.borrow();
    let rule_set = rules.as_ref().expect("rule set configured");
    let outcome = context.scorer.score(&context.sample.borrow(), rule_set);
    *context.outcome.borrow_mut() = Some(outcome);
}

#[when("I assess the sample with a surf fallback")]
fn assess_sample(context: &TestContext) {
    let rules = context.rules.borrow();
    let outcome = assess(
        &context.sample.borrow(),
        rules.as_ref(),
        Some(AptitudeSport::Surf),
        &context.scorer,
    );
    *context.assessment.borrow_mut() = Some(outcome);
}

fn assert_score(context: &TestContext, value: f64, label: ScoreLabel) {
    let outcome = context.outcome.borrow();
    let result = outcome
        .as_ref()
        .expect("sample scored")
        .as_ref()
        .expect("scoring should succeed");
    assert_eq!(result.value(), value);
    assert_eq!(result.label(), label);
}

fn scoring_error(context: &TestContext) -> ScoringError {
    context
        .outcome
        .borrow()
        .clone()
        .expect("sample scored")
        .expect_err("scoring should fail")
}

#[then("the score is 100 labelled Excelente")]
fn full_marks(context: &TestContext) {
    assert_score(context, 100.0, ScoreLabel::Excelente);
}

#[then("the score is 0 labelled Pobre")]
fn no_marks(context: &TestContext) {
    assert_score(context, 0.0, ScoreLabel::Pobre);
}

#[then("scoring fails because the rule set is empty")]
fn empty_failure(context: &TestContext) {
    assert!(matches!(
        scoring_error(context),
        ScoringError::EmptyRuleSet { .. }
    ));
}

#[then("scoring fails because the rule set is inactive")]
fn inactive_failure(context: &TestContext) {
    assert!(matches!(
        scoring_error(context),
        ScoringError::InactiveRuleSet { .. }
    ));
}

#[then("scoring fails because wind speed is missing")]
fn missing_failure(context: &TestContext) {
    assert_eq!(
        scoring_error(context),
        ScoringError::MissingVariable {
            variable: WeatherVariable::WindSpeed
        }
    );
}

#[then("the assessment falls back to an excelente aptitude")]
fn fallback_aptitude(context: &TestContext) {
    let assessment = context.assessment.borrow();
    assert!(matches!(
        assessment.as_ref().expect("sample assessed"),
        Assessment::Fallback {
            aptitude: Aptitude::Excelente,
            ..
        }
    ));
}

#[scenario(path = "tests/features/scoring.feature", index = 0)]
fn wind_inside_window(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 1)]
fn wind_above_window(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 2)]
fn empty_rule_set(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 3)]
fn inactive_rule_set(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 4)]
fn missing_reading(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/scoring.feature", index = 5)]
fn fallback_to_aptitude(context: TestContext) {
    let _ = context;
}

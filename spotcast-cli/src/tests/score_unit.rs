//! Focused unit tests covering score CLI configuration and output.

use super::helpers::{CALM_FLAT_SAMPLE, WINDY_SAMPLE, Workspace, output_json};
use super::*;
use crate::inputs::{PolicyKind, SampleFormat, SelectedPolicy};
use crate::score::{ScoreConfig, config_from_layers_for_test, run_score_with};
use rstest::{fixture, rstest};
use spotcast_core::{AptitudeSport, HardStep, ScoringError, SportId};
use spotcast_scorer::Unscored;

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn args_for(workspace: &Workspace, sample: &str, sport: &str) -> ScoreArgs {
    ScoreArgs {
        sample: Some(workspace.write("sample.json", sample)),
        rules: Some(workspace.rules()),
        sport: Some(sport.to_owned()),
        ..ScoreArgs::default()
    }
}

fn run(args: ScoreArgs) -> Result<serde_json::Value, CliError> {
    let mut buffer = Vec::new();
    run_score_with(args, &mut buffer)?;
    Ok(output_json(&buffer))
}

#[rstest]
#[case::sample(None, Some("rules.json"), Some("kayak"), ARG_SAMPLE, ENV_SCORE_SAMPLE)]
#[case::rules(Some("sample.json"), None, Some("kayak"), ARG_RULES, ENV_SCORE_RULES)]
#[case::sport(Some("sample.json"), Some("rules.json"), None, ARG_SPORT, ENV_SCORE_SPORT)]
fn converting_without_required_fields_errors(
    #[case] sample: Option<&str>,
    #[case] rules: Option<&str>,
    #[case] sport: Option<&str>,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let args = ScoreArgs {
        sample: sample.map(Into::into),
        rules: rules.map(Into::into),
        sport: sport.map(str::to_owned),
        ..ScoreArgs::default()
    };
    match ScoreConfig::try_from(args).expect_err("missing field should error") {
        CliError::MissingArgument { field: missing, env } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_applies_defaults() {
    let args = ScoreArgs {
        sample: Some("sample.json".into()),
        rules: Some("rules.json".into()),
        sport: Some(" kayak ".to_owned()),
        fallback: Some("Kitesurf".to_owned()),
        ..ScoreArgs::default()
    };
    let config = ScoreConfig::try_from(args).expect("config should build");
    assert_eq!(config.sport, SportId::new("kayak").expect("id"));
    assert_eq!(config.sample_format, SampleFormat::Canonical);
    assert_eq!(config.policy, SelectedPolicy::HardStep(HardStep));
    assert_eq!(config.fallback, Some(AptitudeSport::Kite));
}

#[rstest]
#[case(0.0)]
#[case(-2.0)]
#[case(f64::NAN)]
fn converting_rejects_bad_ramp_margins(#[case] margin: f64) {
    let args = ScoreArgs {
        sample: Some("sample.json".into()),
        rules: Some("rules.json".into()),
        sport: Some("kayak".to_owned()),
        policy: Some(PolicyKind::LinearRamp),
        ramp_margin: Some(margin),
        ..ScoreArgs::default()
    };
    assert!(matches!(
        ScoreConfig::try_from(args),
        Err(CliError::InvalidRampMargin { .. })
    ));
}

#[rstest]
fn converting_rejects_unknown_fallbacks() {
    let args = ScoreArgs {
        sample: Some("sample.json".into()),
        rules: Some("rules.json".into()),
        sport: Some("kayak".to_owned()),
        fallback: Some("windsurf".to_owned()),
        ..ScoreArgs::default()
    };
    assert!(matches!(
        ScoreConfig::try_from(args),
        Err(CliError::UnknownAptitudeSport(_))
    ));
}

#[rstest]
fn merge_layers_honour_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "rules": "from-file.json", "policy": "linear-ramp" }),
        None,
    );
    composer.push_environment(json!({
        "sample": "from-env.json",
        "sport": "kayak",
    }));
    composer.push_cli(json!({ "sport": "kitesurf" }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.sample.as_str(), "from-env.json");
    assert_eq!(config.rules.as_str(), "from-file.json");
    assert_eq!(config.sport.as_str(), "kitesurf");
    assert!(matches!(config.policy, SelectedPolicy::LinearRamp(_)));
}

#[rstest]
fn scoring_prints_the_assessment_and_contributions(workspace: Workspace) {
    let output = run(args_for(&workspace, WINDY_SAMPLE, "kitesurf")).expect("score succeeds");
    assert_eq!(output["sport_id"], "kitesurf");
    assert_eq!(output["assessment"]["kind"], "scored");
    assert_eq!(output["assessment"]["value"], 100.0);
    assert_eq!(output["assessment"]["label"], "Excelente");
    assert_eq!(output["score"], 100.0);
    assert_eq!(output["contributions"].as_array().map(Vec::len), Some(2));
}

#[rstest]
fn flat_samples_are_adapted(workspace: Workspace) {
    let args = ScoreArgs {
        sample_format: Some(SampleFormat::Flat),
        ..args_for(&workspace, CALM_FLAT_SAMPLE, "kayak")
    };
    let output = run(args).expect("score succeeds");
    assert_eq!(output["assessment"]["value"], 100.0);
}

#[rstest]
fn linear_ramp_softens_violations(workspace: Workspace) {
    let args = ScoreArgs {
        policy: Some(PolicyKind::LinearRamp),
        ..args_for(&workspace, WINDY_SAMPLE, "kayak")
    };
    let output = run(args).expect("score succeeds");
    let value = output["assessment"]["value"].as_f64().expect("numeric score");
    assert!((57.9..=58.1).contains(&value), "unexpected score {value}");
    let rounded = output["score"].as_f64().expect("rounded score");
    assert_eq!(rounded, (value * 100.0).round() / 100.0);
}

#[rstest]
fn unknown_sports_fall_back_when_requested(workspace: Workspace) {
    let args = ScoreArgs {
        fallback: Some("kite".to_owned()),
        ..args_for(&workspace, WINDY_SAMPLE, "windsurf")
    };
    let output = run(args).expect("fallback succeeds");
    assert_eq!(output["assessment"]["kind"], "fallback");
    assert_eq!(output["assessment"]["aptitude"], "bueno");
    assert_eq!(output["assessment"]["reason"], "no rule set configured");
    assert!(output["score"].is_null());
    assert_eq!(output["contributions"].as_array().map(Vec::len), Some(0));
}

#[rstest]
fn inactive_sports_fail_without_fallback(workspace: Workspace) {
    let err = run(args_for(&workspace, WINDY_SAMPLE, "surf")).expect_err("surf is inactive");
    match err {
        CliError::Unscored { sport_id, reason } => {
            assert_eq!(sport_id, "surf");
            assert_eq!(
                reason,
                Unscored::Failed(ScoringError::InactiveRuleSet {
                    sport_id: SportId::new("surf").expect("id"),
                })
            );
        }
        other => panic!("expected Unscored, found {other:?}"),
    }
}

#[rstest]
fn malformed_samples_report_the_path(workspace: Workspace) {
    let args = args_for(&workspace, "{ not json", "kayak");
    match run(args).expect_err("sample is malformed") {
        CliError::ParseSample { path, .. } => assert_eq!(path, workspace.path("sample.json")),
        other => panic!("expected ParseSample, found {other:?}"),
    }
}

#[rstest]
fn missing_rules_files_are_reported(workspace: Workspace) {
    let args = ScoreArgs {
        rules: Some(workspace.path("absent.json")),
        ..args_for(&workspace, WINDY_SAMPLE, "kayak")
    };
    match run(args).expect_err("rules file is absent") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RULES),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

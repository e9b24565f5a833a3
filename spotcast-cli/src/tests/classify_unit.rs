//! Focused unit tests covering the classify command.

use super::helpers::{CALM_FLAT_SAMPLE, WINDY_SAMPLE, Workspace, output_json};
use super::*;
use crate::classify::{ClassifyConfig, run_classify_with};
use crate::inputs::SampleFormat;
use rstest::rstest;
use spotcast_core::AptitudeSport;

fn resolve(sport: Option<&str>, offers: Option<&str>) -> Result<ClassifyConfig, CliError> {
    ClassifyConfig::try_from(ClassifyArgs {
        sample: Some("sample.json".into()),
        sport: sport.map(str::to_owned),
        offers: offers.map(str::to_owned),
        ..ClassifyArgs::default()
    })
}

#[rstest]
#[case(None, None, AptitudeSport::Surf)]
#[case(Some("kite"), None, AptitudeSport::Kite)]
#[case(Some("kite"), Some("surf"), AptitudeSport::Surf)]
#[case(None, Some("kitesurf, surf"), AptitudeSport::Kite)]
fn sport_selection_follows_the_offer(
    #[case] sport: Option<&str>,
    #[case] offers: Option<&str>,
    #[case] expected: AptitudeSport,
) {
    let config = resolve(sport, offers).expect("config should build");
    assert_eq!(config.sport, expected);
}

#[rstest]
fn unknown_sports_are_rejected() {
    assert!(matches!(
        resolve(Some("sup"), None),
        Err(CliError::UnknownAptitudeSport(_))
    ));
}

#[rstest]
#[case(WINDY_SAMPLE, SampleFormat::Canonical, "kite", "bueno", "#f59e0b")]
#[case(CALM_FLAT_SAMPLE, SampleFormat::Flat, "surf", "malo", "#dc2626")]
fn prints_the_aptitude_and_colour(
    #[case] sample: &str,
    #[case] format: SampleFormat,
    #[case] sport: &str,
    #[case] aptitude: &str,
    #[case] color: &str,
) {
    let workspace = Workspace::new();
    let args = ClassifyArgs {
        sample: Some(workspace.write("sample.json", sample)),
        sport: Some(sport.to_owned()),
        sample_format: Some(format),
        ..ClassifyArgs::default()
    };
    let mut buffer = Vec::new();
    run_classify_with(args, &mut buffer).expect("classify succeeds");
    let output = output_json(&buffer);
    assert_eq!(output["sport"], sport);
    assert_eq!(output["aptitude"], aptitude);
    assert_eq!(output["color"], color);
}

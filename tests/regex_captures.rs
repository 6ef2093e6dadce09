//! End-to-end tests with real regex matches

use capture_template::{
    interpolate_with, interpolate_with_config, CaptureGroups, InterpolationConfig,
    InterpolationError, ValueSet,
};
use regex::Regex;

fn date_regex() -> Regex {
    Regex::new(r"(?P<year>\d{4})-(?P<month>\d{1,2})(-(?P<day>\d{1,2}))?").unwrap()
}

fn zero_pad(name: &str, value: Option<&str>) -> Option<String> {
    match name {
        "month" | "day" => value.map(|v| format!("{:0>2}", v)),
        _ => value.map(str::to_string),
    }
}

#[test]
fn test_date_report() {
    let regex = date_regex();
    let template = "year: {year}, month: {month}( and maybe day: {day})";

    let rendered = ["1992-1-3", "1992-11", "2024-2-29"]
        .iter()
        .map(|input| {
            let groups = CaptureGroups::find(&regex, input).expect("date should match");
            interpolate_with(template, &groups, zero_pad).expect("Should interpolate")
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(rendered, @r"
    year: 1992, month: 01 and maybe day: 03
    year: 1992, month: 11
    year: 2024, month: 02 and maybe day: 29
    ");
}

#[test]
fn test_unknown_group_name() {
    let regex = date_regex();
    let groups = CaptureGroups::find(&regex, "1992-1").unwrap();

    let err = interpolate_with("{year}({hour})", &groups, zero_pad).unwrap_err();
    assert_eq!(
        err,
        InterpolationError::UnrecognizedParameter {
            name: "hour".to_string(),
            span: 7..13,
        }
    );
}

#[test]
fn test_unnamed_groups_are_not_parameters() {
    let regex = Regex::new(r"(\d+)-(?P<b>\d+)").unwrap();
    let groups = CaptureGroups::find(&regex, "1-2").unwrap();

    assert!(interpolate_with("{1}", &groups, zero_pad).is_err());
    assert_eq!(interpolate_with("{b}", &groups, zero_pad).unwrap(), "2");
}

#[test]
fn test_snapshot_of_captures_matches_live_groups() {
    let regex = date_regex();
    let groups = CaptureGroups::find(&regex, "1992-11").unwrap();
    let snapshot = ValueSet::from(&groups);
    let template = "{year}/{month}(/{day})|{day:none}";

    assert_eq!(
        interpolate_with(template, &groups, zero_pad).unwrap(),
        interpolate_with(template, &snapshot, zero_pad).unwrap(),
    );
}

#[test]
fn test_values_from_toml_file_format() {
    let values = ValueSet::from_toml_str(
        r#"
unmatched = ["day"]

[values]
year = "1992"
month = "7"
"#,
    )
    .unwrap();

    let result = interpolate_with("{year}-{month}(-{day})", &values, zero_pad).unwrap();
    assert_eq!(result, "1992-07");
}

#[test]
fn test_runaway_callback_is_bounded() {
    let regex = date_regex();
    let groups = CaptureGroups::find(&regex, "1992-1").unwrap();
    let config = InterpolationConfig::new().with_max_passes(16);

    let err = interpolate_with_config(
        "{year}",
        &groups,
        |_: &str, value: Option<&str>| value.map(|v| format!("{{year}}{}", v)),
        &config,
    )
    .unwrap_err();
    assert_eq!(err, InterpolationError::PassLimitExceeded { passes: 16 });
}

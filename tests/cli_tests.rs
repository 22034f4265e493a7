use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn audit_visuals() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("audit_visuals"))
}

#[test]
fn renders_svg_and_prints_generated_path() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("score.svg");

    audit_visuals()
        .arg("score_gauge")
        .arg(r#"{"score": 72, "title": "Overall Score"}"#)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated: "))
        .stdout(predicate::str::contains("score.svg"));

    let document = fs::read_to_string(&output).expect("svg written");
    assert!(document.contains("Overall Score"));
}

#[cfg(feature = "cairo-backend")]
#[test]
fn renders_png_and_prints_generated_path() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("gbp-score-1.png");

    audit_visuals()
        .arg("score_gauge")
        .arg(r#"{"score": 72, "title": "GBP Optimization Score"}"#)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("gbp-score-1.png"));

    let bytes = fs::read(&output).expect("png written");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn unknown_kind_exits_with_failure() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("pie.svg");

    audit_visuals()
        .arg("pie_chart")
        .arg("{}")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: pie_chart"));

    assert!(!output.exists());
}

#[test]
fn missing_arguments_print_usage() {
    audit_visuals()
        .arg("score_gauge")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_successfully() {
    audit_visuals()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("revenue_opportunity"));
}

#[test]
fn invalid_payload_exits_with_failure_and_no_file() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("heat.svg");

    audit_visuals()
        .arg("heat_map")
        .arg(r#"{"grid": [[1, 2], [3]], "title": "t", "center_label": "c"}"#)
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("heat_map"));

    assert!(!output.exists());
}

#[test]
fn malformed_json_exits_with_failure() {
    let dir = TempDir::new().expect("temp dir");

    audit_visuals()
        .arg("metric_card")
        .arg("{value: 3")
        .arg(dir.path().join("card.svg"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("json"));
}

#[test]
fn scale_flag_changes_output_size() {
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("revenue.svg");

    audit_visuals()
        .args(["--scale", "1"])
        .arg("revenue_opportunity")
        .arg(r#"{"monthly_recovery": 12345}"#)
        .arg(&output)
        .assert()
        .success();

    let document = fs::read_to_string(&output).expect("svg written");
    assert!(document.contains("width=\"1000\" height=\"600\""));
    assert!(document.contains("$12,345"));
}

#[test]
fn config_file_sets_theme_colors() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("theme.json");
    fs::write(&config, r##"{ "theme": { "primary": "#123456" } }"##).expect("write config");
    let output = dir.path().join("card.svg");

    audit_visuals()
        .arg("--config")
        .arg(&config)
        .arg("metric_card")
        .arg(r#"{"value": "4.8", "label": "Rating", "sublabel": "Google"}"#)
        .arg(&output)
        .assert()
        .success();

    let document = fs::read_to_string(&output).expect("svg written");
    assert!(document.contains("#123456"));
}

#[test]
fn unsupported_extension_exits_with_failure() {
    let dir = TempDir::new().expect("temp dir");

    audit_visuals()
        .arg("funnel_chart")
        .arg(r#"{"stages": [{"label": "Visits"}]}"#)
        .arg(dir.path().join("funnel.gif"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported output format"));
}

use std::fs;

use audit_visuals::core::Viewport;
use audit_visuals::render::OutputFormat;
use audit_visuals::{ChartError, ChartKind, ChartRenderer};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn svg_output_is_written_and_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("gauge.svg");

    let rendered = ChartRenderer::default()
        .render_json_to_path(
            ChartKind::ScoreGauge,
            r#"{"score": 72, "title": "Overall"}"#,
            &path,
        )
        .expect("render");

    assert_eq!(rendered.kind, ChartKind::ScoreGauge);
    assert_eq!(rendered.format, OutputFormat::Svg);
    assert_eq!(rendered.path, path);
    assert_eq!(rendered.viewport, Viewport::new(1200, 750));

    let document = fs::read_to_string(&path).expect("svg text");
    assert!(document.contains("Overall"));
}

#[test]
fn extension_is_matched_case_insensitively() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("card.SVG");

    let rendered = ChartRenderer::default()
        .render_to_path(
            ChartKind::MetricCard,
            &json!({ "value": 9, "label": "Leads", "sublabel": "today" }),
            &path,
        )
        .expect("render");
    assert_eq!(rendered.format, OutputFormat::Svg);
    assert!(path.exists());
}

#[test]
fn unsupported_extension_creates_no_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("gauge.jpg");

    let err = ChartRenderer::default()
        .render_to_path(
            ChartKind::ScoreGauge,
            &json!({ "score": 50, "title": "Score" }),
            &path,
        )
        .expect_err("jpg unsupported");

    assert!(matches!(err, ChartError::UnsupportedOutputFormat(_)));
    assert!(!path.exists());
}

#[test]
fn invalid_payload_creates_no_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("gauge.svg");

    let err = ChartRenderer::default()
        .render_to_path(
            ChartKind::ScoreGauge,
            &json!({ "score": 140, "title": "Score" }),
            &path,
        )
        .expect_err("score out of range");

    assert!(matches!(err, ChartError::InvalidPayload { .. }));
    assert!(!path.exists());
}

#[test]
fn malformed_json_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("gauge.svg");

    let err = ChartRenderer::default()
        .render_json_to_path(ChartKind::ScoreGauge, "{not json", &path)
        .expect_err("malformed");
    assert!(matches!(err, ChartError::Json(_)));

    let err = ChartRenderer::default()
        .render_json_to_path(ChartKind::ScoreGauge, "[1, 2, 3]", &path)
        .expect_err("not an object");
    assert!(matches!(err, ChartError::InvalidPayload { .. }));
    assert!(!path.exists());
}

#[test]
fn missing_output_directory_is_an_io_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing").join("gauge.svg");

    let err = ChartRenderer::default()
        .render_to_path(
            ChartKind::ScoreGauge,
            &json!({ "score": 50, "title": "Score" }),
            &path,
        )
        .expect_err("no parent directory");
    assert!(matches!(err, ChartError::Io(_)));
}

#[cfg(feature = "cairo-backend")]
#[test]
fn png_output_is_written_with_default_features() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("gbp-score-1.png");

    let rendered = ChartRenderer::default()
        .render_to_path(
            ChartKind::ScoreGauge,
            &json!({ "score": 72, "title": "GBP Optimization Score" }),
            &path,
        )
        .expect("render png");

    assert_eq!(rendered.format, OutputFormat::Png);
    let bytes = fs::read(&path).expect("png bytes");
    assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
}

// Headless builds (`--no-default-features`) only write SVG.
#[cfg(not(feature = "cairo-backend"))]
#[test]
fn png_requires_the_cairo_backend() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("gauge.png");

    let err = ChartRenderer::default()
        .render_to_path(
            ChartKind::ScoreGauge,
            &json!({ "score": 50, "title": "Score" }),
            &path,
        )
        .expect_err("png backend missing");
    assert!(matches!(err, ChartError::BackendUnavailable("png")));
    assert!(!path.exists());
}

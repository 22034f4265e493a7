use std::f64::consts::PI;

use approx::assert_relative_eq;
use audit_visuals::charts::ScoreGauge;
use audit_visuals::core::Viewport;
use audit_visuals::render::RenderFrame;
use audit_visuals::{ChartError, ChartKind, ChartRenderer, ChartResult, Theme};
use serde_json::json;

fn build(payload: serde_json::Value) -> ChartResult<RenderFrame> {
    ChartRenderer::default().build_frame(ChartKind::ScoreGauge, &payload)
}

#[test]
fn gauge_frame_has_track_score_ring_and_labels() {
    let frame = build(json!({ "score": 72, "title": "Overall Score" })).expect("frame");
    let theme = Theme::default();

    assert_eq!(frame.viewport, Viewport::new(1200, 750));
    assert_eq!(frame.arcs.len(), 2);
    assert_eq!(frame.arcs[0].fill_color, theme.track);
    assert_eq!(frame.arcs[1].fill_color, theme.severity.good);

    let labels: Vec<&str> = frame.labels().collect();
    assert_eq!(labels, vec!["72", "/100", "Overall Score"]);
}

#[test]
fn gauge_ring_is_the_upper_half_centered_on_the_score() {
    let frame = build(json!({ "score": 50, "title": "Score" })).expect("frame");
    let track = frame.arcs[0];

    assert_relative_eq!(track.center_x, 600.0, epsilon = 1e-9);
    assert_relative_eq!(track.center_y, 500.0, epsilon = 1e-9);
    assert_relative_eq!(track.outer_radius, 360.0, epsilon = 1e-9);
    assert_relative_eq!(track.inner_radius, 312.0, epsilon = 1e-9);
    assert_relative_eq!(track.start_angle, -PI, epsilon = 1e-12);
    assert_relative_eq!(track.end_angle, 0.0, epsilon = 1e-12);
}

#[test]
fn score_ring_starts_at_the_left_end_and_is_proportional() {
    let frame = build(json!({ "score": 50, "title": "Score" })).expect("frame");
    let score = frame.arcs[1];

    assert_relative_eq!(score.start_angle, -PI, epsilon = 1e-12);
    assert_relative_eq!(score.sweep(), PI / 2.0, epsilon = 1e-12);
    assert_eq!(score.fill_color, Theme::default().severity.warn);
}

#[test]
fn full_score_fills_the_whole_track() {
    let frame = build(json!({ "score": 100, "title": "Perfect" })).expect("frame");

    assert_relative_eq!(frame.arcs[1].sweep(), PI, epsilon = 1e-12);
    assert_eq!(frame.arcs[1].fill_color, Theme::default().severity.good);
}

#[test]
fn zero_score_draws_only_the_track() {
    let frame = build(json!({ "score": 0, "title": "Nothing yet" })).expect("frame");

    assert_eq!(frame.arcs.len(), 1);
    assert!(frame.labels().any(|label| label == "0"));
}

#[test]
fn fractional_score_keeps_its_decimals() {
    let frame = build(json!({ "score": 38.5, "title": "Score" })).expect("frame");

    assert!(frame.labels().any(|label| label == "38.5"));
    assert_eq!(frame.arcs[1].fill_color, Theme::default().severity.bad);
}

#[test]
fn out_of_range_score_is_rejected() {
    for score in [-1.0, 100.5, 250.0] {
        let err = build(json!({ "score": score, "title": "Score" })).expect_err("out of range");
        assert!(matches!(
            err,
            ChartError::InvalidPayload { kind: "score_gauge", .. }
        ));
    }
}

#[test]
fn missing_title_is_a_payload_error() {
    let err = build(json!({ "score": 80 })).expect_err("missing title");
    assert!(matches!(err, ChartError::InvalidPayload { .. }));
}

#[test]
fn sweep_degrees_is_linear_in_score() {
    let gauge = ScoreGauge {
        score: 25.0,
        title: "Score".to_owned(),
    };
    assert_relative_eq!(gauge.sweep_degrees(), 45.0);
}

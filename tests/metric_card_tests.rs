use audit_visuals::charts::{MetricCard, MetricValue};
use audit_visuals::core::Viewport;
use audit_visuals::render::{Color, FontWeight};
use audit_visuals::{ChartError, ChartKind, ChartRenderer, Theme};
use serde_json::json;

#[test]
fn card_shows_value_uppercased_label_and_sublabel() {
    let payload = json!({
        "value": "4.2",
        "label": "Average rating",
        "sublabel": "from 18 reviews"
    });
    let frame = ChartRenderer::default()
        .build_frame(ChartKind::MetricCard, &payload)
        .expect("frame");

    assert_eq!(frame.viewport, Viewport::new(900, 600));
    assert_eq!(frame.rects.len(), 1);
    let labels: Vec<&str> = frame.labels().collect();
    assert_eq!(labels, vec!["4.2", "AVERAGE RATING", "from 18 reviews"]);
    assert_eq!(frame.texts[0].color, Theme::default().primary);
    assert_eq!(frame.texts[0].weight, FontWeight::Bold);
}

#[test]
fn numeric_values_are_shown_as_given() {
    let card: MetricCard = serde_json::from_value(
        json!({ "value": 87, "label": "Leads", "sublabel": "last 30 days" }),
    )
    .expect("payload");
    assert!(matches!(card.value, MetricValue::Number(_)));
    assert_eq!(card.value.to_string(), "87");

    let card: MetricCard = serde_json::from_value(
        json!({ "value": 4.5, "label": "Rating", "sublabel": "" }),
    )
    .expect("payload");
    assert_eq!(card.value.to_string(), "4.5");
}

#[test]
fn explicit_color_overrides_primary() {
    let payload = json!({
        "value": "12",
        "label": "Missed calls",
        "sublabel": "this week",
        "color": "#EF4444"
    });
    let frame = ChartRenderer::default()
        .build_frame(ChartKind::MetricCard, &payload)
        .expect("frame");

    assert_eq!(frame.texts[0].color, Color::from_rgb8(0xEF, 0x44, 0x44));
}

#[test]
fn empty_sublabel_is_not_drawn() {
    let payload = json!({ "value": "3", "label": "Listings", "sublabel": "" });
    let frame = ChartRenderer::default()
        .build_frame(ChartKind::MetricCard, &payload)
        .expect("frame");

    assert_eq!(frame.texts.len(), 2);
}

#[test]
fn invalid_color_is_a_payload_error() {
    let payload = json!({ "value": "3", "label": "Listings", "sublabel": "", "color": "orange" });
    let err = ChartRenderer::default()
        .build_frame(ChartKind::MetricCard, &payload)
        .expect_err("bad color");

    assert!(matches!(
        err,
        ChartError::InvalidPayload { kind: "metric_card", .. }
    ));
    let message = err.to_string();
    assert!(message.contains("orange"));
    assert!(message.contains("hex color"));
    assert!(message.contains("named colors are not supported"));
}

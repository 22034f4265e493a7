use audit_visuals::charts::RevenueOpportunity;
use audit_visuals::charts::format::format_currency;
use audit_visuals::{ChartError, ChartKind, ChartRenderer, Theme};
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn whole_amounts_have_no_cents() {
    assert_eq!(format_currency(Decimal::from(12_345)), "$12,345");
    assert_eq!(format_currency(Decimal::from(0)), "$0");
    assert_eq!(format_currency(Decimal::from(999)), "$999");
    assert_eq!(format_currency(Decimal::from(1_000_000)), "$1,000,000");
}

#[test]
fn fractional_amounts_show_two_decimals() {
    assert_eq!(format_currency(Decimal::new(1_234_550, 2)), "$12,345.50");
    assert_eq!(format_currency(Decimal::new(1_005, 2)), "$10.05");
    assert_eq!(format_currency(Decimal::new(12_999, 3)), "$13");
}

#[test]
fn callout_shows_amount_in_primary_color() {
    let frame = ChartRenderer::default()
        .build_frame(ChartKind::RevenueOpportunity, &json!({ "monthly_recovery": 4250 }))
        .expect("frame");
    let theme = Theme::default();

    assert_eq!(frame.rects.len(), 1);
    assert_eq!(frame.rects[0].border_color, theme.primary);
    assert_eq!(frame.rects[0].fill_color, theme.callout_fill);

    let amount = frame
        .texts
        .iter()
        .find(|text| text.text == "$4,250")
        .expect("amount label");
    assert_eq!(amount.color, theme.primary);
    assert!(frame.texts.iter().any(|text| text.italic));
    assert!(frame.labels().any(|label| label == "Estimated Monthly Revenue Recovery"));
}

#[test]
fn amount_accepts_numbers_and_strings() {
    let from_number: RevenueOpportunity =
        serde_json::from_value(json!({ "monthly_recovery": 12345.5 })).expect("number");
    assert_eq!(from_number.amount_label(), "$12,345.50");

    let from_string: RevenueOpportunity =
        serde_json::from_value(json!({ "monthly_recovery": "8000.00" })).expect("string");
    assert_eq!(from_string.amount_label(), "$8,000");
}

#[test]
fn negative_amount_is_rejected() {
    let err = ChartRenderer::default()
        .build_frame(ChartKind::RevenueOpportunity, &json!({ "monthly_recovery": -10 }))
        .expect_err("negative");

    assert!(matches!(
        err,
        ChartError::InvalidPayload { kind: "revenue_opportunity", .. }
    ));
}

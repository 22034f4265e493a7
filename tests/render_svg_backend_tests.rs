use audit_visuals::core::Viewport;
use audit_visuals::render::{
    Color, LinePrimitive, LineStrokeStyle, RenderFrame, Renderer, SvgRenderer, TextHAlign,
    TextPrimitive,
};
use audit_visuals::{ChartError, ChartKind, ChartRenderer};
use serde_json::json;

#[test]
fn svg_document_has_viewport_size_and_background() {
    let frame =
        RenderFrame::new(Viewport::new(320, 200)).with_background(Color::from_rgb8(1, 2, 3));
    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");

    let document = renderer.document().expect("document");
    assert!(document.starts_with("<?xml"));
    assert!(document.contains("width=\"320\" height=\"200\""));
    assert!(document.contains("fill=\"#010203\""));
    assert!(document.trim_end().ends_with("</svg>"));
}

#[test]
fn dashed_lines_carry_a_dash_pattern() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_line(
        LinePrimitive::new(0.0, 50.0, 100.0, 50.0, 1.0, Color::rgb(0.5, 0.5, 0.5))
            .with_stroke_style(LineStrokeStyle::Dashed),
    );
    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");

    assert!(renderer.document().expect("document").contains("stroke-dasharray"));
}

#[test]
fn text_is_escaped() {
    let frame = RenderFrame::new(Viewport::new(100, 100)).with_text(TextPrimitive::new(
        "A&B <Plumbing>",
        50.0,
        50.0,
        12.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Center,
    ));
    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");

    let document = renderer.document().expect("document");
    assert!(document.contains("A&amp;B &lt;Plumbing&gt;"));
    assert!(document.contains("text-anchor=\"middle\""));
}

#[test]
fn gauge_svg_contains_ring_paths() {
    let frame = ChartRenderer::default()
        .build_frame(ChartKind::ScoreGauge, &json!({ "score": 81, "title": "Score" }))
        .expect("frame");
    let mut renderer = SvgRenderer::new();
    renderer.render(&frame).expect("render");

    let document = renderer.document().expect("document");
    assert_eq!(document.matches("<path").count(), 2);
    assert!(document.contains(">81</text>"));
}

#[test]
fn rendering_is_byte_for_byte_repeatable() {
    let payload = json!({
        "grid": [[1, 4], [12, null]],
        "title": "Visibility",
        "center_label": "Office"
    });
    let frame = ChartRenderer::default()
        .build_frame(ChartKind::HeatMap, &payload)
        .expect("frame");

    let mut first = SvgRenderer::new();
    first.render(&frame).expect("first");
    let mut second = SvgRenderer::new();
    second.render(&frame).expect("second");

    assert_eq!(first.document(), second.document());
}

#[test]
fn writing_before_rendering_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = SvgRenderer::new()
        .write_svg(&dir.path().join("chart.svg"))
        .expect_err("nothing rendered");

    assert!(matches!(err, ChartError::Backend(_)));
}

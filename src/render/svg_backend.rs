use std::f64::consts::TAU;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, FontWeight, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

/// Vector renderer producing a standalone SVG document.
///
/// Needs no native libraries, so it is always compiled in.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: Option<String>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "svg"
    }

    /// Returns the document produced by the last successful `render`.
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn write_svg(&self, path: &Path) -> ChartResult<()> {
        let document = self.document.as_deref().ok_or_else(|| {
            ChartError::Backend("no frame has been rendered to svg yet".to_owned())
        })?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(document.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let mut content = Vec::with_capacity(
            1 + frame.lines.len() + frame.rects.len() + frame.arcs.len() + frame.texts.len(),
        );
        content.push(format!(
            "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" {}/>",
            fill_attrs(frame.background)
        ));
        content.extend(frame.lines.iter().map(|line| line_element(*line)));
        content.extend(frame.rects.iter().map(|rect| rect_element(*rect)));
        content.extend(frame.arcs.iter().map(|arc| arc_element(*arc)));
        content.extend(frame.texts.iter().map(text_element));

        debug!(elements = content.len(), "svg frame drawn");
        self.document = Some(format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n  {}\n</svg>\n",
            content.join("\n  ")
        ));
        Ok(())
    }
}

fn fill_attrs(color: Color) -> String {
    if color.alpha < 1.0 {
        format!(
            "fill=\"{}\" fill-opacity=\"{:.3}\"",
            color.with_alpha(1.0).to_hex(),
            color.alpha
        )
    } else {
        format!("fill=\"{}\"", color.to_hex())
    }
}

fn stroke_attrs(color: Color, width: f64) -> String {
    let mut attrs = format!(
        "stroke=\"{}\" stroke-width=\"{width:.2}\"",
        color.with_alpha(1.0).to_hex()
    );
    if color.alpha < 1.0 {
        attrs.push_str(&format!(" stroke-opacity=\"{:.3}\"", color.alpha));
    }
    attrs
}

fn line_element(line: LinePrimitive) -> String {
    let dash = match line.stroke_style {
        LineStrokeStyle::Solid => "",
        LineStrokeStyle::Dashed => " stroke-dasharray=\"6 4\"",
    };
    format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}{dash}/>",
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        stroke_attrs(line.color, line.stroke_width)
    )
}

fn rect_element(rect: RectPrimitive) -> String {
    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let corners = if radius > 0.0 {
        format!(" rx=\"{radius:.2}\" ry=\"{radius:.2}\"")
    } else {
        String::new()
    };
    let border = if rect.border_width > 0.0 {
        format!(" {}", stroke_attrs(rect.border_color, rect.border_width))
    } else {
        String::new()
    };
    format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"{corners} {}{border}/>",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        fill_attrs(rect.fill_color)
    )
}

fn arc_element(arc: ArcPrimitive) -> String {
    // A single SVG arc command cannot describe a full turn.
    let end_angle = arc.end_angle.min(arc.start_angle + TAU - 1e-6);
    let large_arc = u8::from(end_angle - arc.start_angle > std::f64::consts::PI);
    let point = |radius: f64, angle: f64| {
        (
            arc.center_x + radius * angle.cos(),
            arc.center_y + radius * angle.sin(),
        )
    };

    let (outer_start_x, outer_start_y) = point(arc.outer_radius, arc.start_angle);
    let (outer_end_x, outer_end_y) = point(arc.outer_radius, end_angle);
    let mut path = format!(
        "M {outer_start_x:.2} {outer_start_y:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {outer_end_x:.2} {outer_end_y:.2}",
        r = arc.outer_radius
    );
    if arc.inner_radius > 0.0 {
        let (inner_end_x, inner_end_y) = point(arc.inner_radius, end_angle);
        let (inner_start_x, inner_start_y) = point(arc.inner_radius, arc.start_angle);
        path.push_str(&format!(
            " L {inner_end_x:.2} {inner_end_y:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {inner_start_x:.2} {inner_start_y:.2} Z",
            r = arc.inner_radius
        ));
    } else {
        path.push_str(&format!(" L {:.2} {:.2} Z", arc.center_x, arc.center_y));
    }
    format!("<path d=\"{path}\" {}/>", fill_attrs(arc.fill_color))
}

fn text_element(text: &TextPrimitive) -> String {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let baseline = match text.v_align {
        TextVAlign::Top => "hanging",
        TextVAlign::Middle => "central",
        TextVAlign::Bottom => "text-after-edge",
    };
    let weight = match text.weight {
        FontWeight::Normal => "normal",
        FontWeight::SemiBold => "600",
        FontWeight::Bold => "bold",
    };
    let style = if text.italic { " font-style=\"italic\"" } else { "" };
    format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"sans-serif\" font-size=\"{:.2}\" font-weight=\"{weight}\"{style} text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\" {}>{}</text>",
        text.x,
        text.y,
        text.font_size_px,
        fill_attrs(text.color),
        escape_xml(&text.text)
    )
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_xml("Joe's <Plumbing> & \"Heating\""),
            "Joe&apos;s &lt;Plumbing&gt; &amp; &quot;Heating&quot;"
        );
    }
}

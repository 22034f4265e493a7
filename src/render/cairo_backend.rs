use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, FontWeight, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextVAlign,
};

const DASH_PATTERN: [f64; 2] = [6.0, 4.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub arcs_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster renderer.
///
/// Draws into an offscreen ARGB32 image surface that can be written out as
/// PNG once a frame has been rendered.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Creates a surface sized to the frame viewport.
    pub fn for_frame(frame: &RenderFrame) -> ChartResult<Self> {
        let overflow = || ChartError::InvalidViewport {
            width: frame.viewport.width,
            height: frame.viewport.height,
        };
        let width = i32::try_from(frame.viewport.width).map_err(|_| overflow())?;
        let height = i32::try_from(frame.viewport.height).map_err(|_| overflow())?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface to `path` as PNG.
    pub fn write_png(&self, path: &Path) -> ChartResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.surface.write_to_png(&mut writer).map_err(|err| {
            ChartError::Backend(format!("failed to write png `{}`: {err}", path.display()))
        })?;
        writer.flush()?;
        Ok(())
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, frame.background);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            match line.stroke_style {
                LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
                LineStrokeStyle::Dashed => context.set_dash(&DASH_PATTERN, 0.0),
            }
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for rect in &frame.rects {
            append_rect_path(context, *rect);
            apply_color(context, rect.fill_color);
            if rect.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                apply_color(context, rect.border_color);
                context.set_line_width(rect.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            stats.rects_drawn += 1;
        }

        for arc in &frame.arcs {
            append_arc_path(context, *arc);
            apply_color(context, arc.fill_color);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill arc", err))?;
            stats.arcs_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let mut font_description = FontDescription::new();
            font_description.set_family("Sans");
            font_description.set_absolute_size(text.font_size_px * f64::from(pango::SCALE));
            font_description.set_weight(match text.weight {
                FontWeight::Normal => pango::Weight::Normal,
                FontWeight::SemiBold => pango::Weight::Semibold,
                FontWeight::Bold => pango::Weight::Bold,
            });
            if text.italic {
                font_description.set_style(pango::Style::Italic);
            }
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };
            let y = match text.v_align {
                TextVAlign::Top => text.y,
                TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
                TextVAlign::Bottom => text.y - f64::from(text_height),
            };

            apply_color(context, text.color);
            context.move_to(x, y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        debug!(
            lines = stats.lines_drawn,
            rects = stats.rects_drawn,
            arcs = stats.arcs_drawn,
            texts = stats.texts_drawn,
            "cairo frame drawn"
        );
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn append_rect_path(context: &Context, rect: RectPrimitive) {
    if rect.corner_radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let radius = rect
        .corner_radius
        .min(rect.width * 0.5)
        .min(rect.height * 0.5);
    let left = rect.x;
    let top = rect.y;
    let right = rect.x + rect.width;
    let bottom = rect.y + rect.height;

    context.new_sub_path();
    context.arc(right - radius, top + radius, radius, -FRAC_PI_2, 0.0);
    context.arc(right - radius, bottom - radius, radius, 0.0, FRAC_PI_2);
    context.arc(left + radius, bottom - radius, radius, FRAC_PI_2, PI);
    context.arc(left + radius, top + radius, radius, PI, PI + FRAC_PI_2);
    context.close_path();
}

fn append_arc_path(context: &Context, arc: ArcPrimitive) {
    context.new_sub_path();
    context.arc(
        arc.center_x,
        arc.center_y,
        arc.outer_radius,
        arc.start_angle,
        arc.end_angle,
    );
    context.arc_negative(
        arc.center_x,
        arc.center_y,
        arc.inner_radius,
        arc.end_angle,
        arc.start_angle,
    );
    context.close_path();
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}

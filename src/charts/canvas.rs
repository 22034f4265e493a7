use crate::core::{LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ArcPrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    TextVAlign,
};

/// Pixels per virtual inch at scale 1.0.
const BASE_PIXELS_PER_INCH: f64 = 100.0;
const POINTS_PER_INCH: f64 = 72.0;

/// Virtual drawing surface for one chart.
///
/// Charts place elements in their own fixed coordinate system (for example
/// 0–10 on both axes, y growing upwards) and in typographic points; the
/// canvas maps both onto the scaled pixel viewport and collects the
/// resulting primitives into a `RenderFrame`.
#[derive(Debug)]
pub struct ChartCanvas {
    frame: RenderFrame,
    x_scale: LinearScale,
    y_scale: LinearScale,
    width_px: f64,
    height_px: f64,
    scale: f64,
}

impl ChartCanvas {
    /// Creates a canvas with 0–10 virtual axes.
    pub fn new(base: Viewport, scale: f64, background: Color) -> ChartResult<Self> {
        let viewport = base.scaled(scale);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self {
            frame: RenderFrame::new(viewport).with_background(background),
            x_scale: LinearScale::new(0.0, 10.0)?,
            y_scale: LinearScale::new(0.0, 10.0)?,
            width_px: f64::from(viewport.width),
            height_px: f64::from(viewport.height),
            scale,
        })
    }

    /// Replaces the virtual axis domains.
    pub fn set_domain(&mut self, x: (f64, f64), y: (f64, f64)) -> ChartResult<()> {
        self.x_scale = LinearScale::new(x.0, x.1)?;
        self.y_scale = LinearScale::new(y.0, y.1)?;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.frame.viewport
    }

    #[must_use]
    pub fn x_domain(&self) -> (f64, f64) {
        self.x_scale.domain()
    }

    #[must_use]
    pub fn y_domain(&self) -> (f64, f64) {
        self.y_scale.domain()
    }

    #[must_use]
    pub fn px(&self, x: f64) -> f64 {
        self.x_scale.domain_to_pixel(x, 0.0, self.width_px)
    }

    #[must_use]
    pub fn py(&self, y: f64) -> f64 {
        self.y_scale.domain_to_pixel(y, self.height_px, 0.0)
    }

    /// Horizontal virtual length in pixels.
    #[must_use]
    pub fn dx(&self, length: f64) -> f64 {
        length / self.x_scale.span().abs() * self.width_px
    }

    /// Vertical virtual length in pixels.
    #[must_use]
    pub fn dy(&self, length: f64) -> f64 {
        length / self.y_scale.span().abs() * self.height_px
    }

    /// Typographic points (font sizes, stroke widths) in pixels.
    #[must_use]
    pub fn points(&self, points: f64) -> f64 {
        points / POINTS_PER_INCH * BASE_PIXELS_PER_INCH * self.scale
    }

    /// Rectangle whose lower-left corner is at virtual `(x, y)`.
    #[must_use]
    pub fn rect(&self, x: f64, y: f64, width: f64, height: f64, fill: Color) -> RectPrimitive {
        RectPrimitive::new(
            self.px(x),
            self.py(y + height),
            self.dx(width),
            self.dy(height),
            fill,
        )
    }

    #[must_use]
    pub fn line(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        width_points: f64,
        color: Color,
    ) -> LinePrimitive {
        LinePrimitive::new(
            self.px(from.0),
            self.py(from.1),
            self.px(to.0),
            self.py(to.1),
            self.points(width_points),
            color,
        )
    }

    /// Text centered on virtual `(x, y)`.
    #[must_use]
    pub fn text(
        &self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        size_points: f64,
        color: Color,
    ) -> TextPrimitive {
        TextPrimitive::new(
            text,
            self.px(x),
            self.py(y),
            self.points(size_points),
            color,
            TextHAlign::Center,
        )
        .with_v_align(TextVAlign::Middle)
    }

    /// Like [`Self::text`] but sized in pixels, for labels that scale with
    /// the layout rather than the typography.
    #[must_use]
    pub fn text_px(
        &self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        size_px: f64,
        color: Color,
    ) -> TextPrimitive {
        TextPrimitive::new(text, self.px(x), self.py(y), size_px, color, TextHAlign::Center)
            .with_v_align(TextVAlign::Middle)
    }

    /// Ring segment covering `from_degrees..to_degrees`, measured
    /// counter-clockwise from the positive x axis (0° right, 90° up).
    ///
    /// Radii are virtual x-axis units so the ring stays circular on
    /// non-square canvases. Returns `None` for an empty sweep.
    #[must_use]
    pub fn ring(
        &self,
        center: (f64, f64),
        radius: f64,
        ring_width: f64,
        from_degrees: f64,
        to_degrees: f64,
        fill: Color,
    ) -> Option<ArcPrimitive> {
        // Screen space has y pointing down, so counter-clockwise math angles
        // become negated screen angles.
        let start = (-to_degrees).to_radians();
        let end = (-from_degrees).to_radians();
        if end <= start {
            return None;
        }
        Some(ArcPrimitive::new(
            self.px(center.0),
            self.py(center.1),
            self.dx(radius),
            self.dx(radius - ring_width),
            start,
            end,
            fill,
        ))
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.frame.rects.push(rect);
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.frame.lines.push(line);
    }

    /// Queues a label; empty labels (an omitted sublabel, say) are skipped.
    pub fn push_text(&mut self, text: TextPrimitive) {
        if text.text.trim().is_empty() {
            return;
        }
        self.frame.texts.push(text);
    }

    pub fn push_arc(&mut self, arc: ArcPrimitive) {
        self.frame.arcs.push(arc);
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }
}

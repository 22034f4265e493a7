use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ArcPrimitive, Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart image.
///
/// Backends paint `background`, then lines, rects, arcs and texts in that
/// order, each list in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub arcs: Vec<ArcPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background: Color::rgb(1.0, 1.0, 1.0),
            lines: Vec::new(),
            rects: Vec::new(),
            arcs: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcPrimitive) -> Self {
        self.arcs.push(arc);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.background.validate()?;
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for arc in &self.arcs {
            arc.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.arcs.is_empty()
            && self.texts.is_empty()
    }

    /// Iterates over every text label, in draw order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().map(|text| text.text.as_str())
    }
}

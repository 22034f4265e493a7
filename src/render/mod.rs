mod frame;
mod null_renderer;
mod output;
mod primitives;
mod svg_backend;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use output::{OutputFormat, write_frame};
pub use primitives::{
    ArcPrimitive, Color, FontWeight, LinePrimitive, LineStrokeStyle, RectPrimitive, TextHAlign,
    TextPrimitive, TextVAlign,
};
pub use svg_backend::SvgRenderer;

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart payloads and layout.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};

use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer, SvgRenderer};

/// Image format selected from the output path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> ChartResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("png") => Ok(Self::Png),
            Some("svg") => Ok(Self::Svg),
            _ => Err(ChartError::UnsupportedOutputFormat(
                path.display().to_string(),
            )),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}

/// Draws `frame` with the backend matching `path` and writes the file.
///
/// The frame is validated and drawn before the file is created, so a failed
/// render never leaves a file behind.
pub fn write_frame(frame: &RenderFrame, path: &Path) -> ChartResult<OutputFormat> {
    let format = OutputFormat::from_path(path)?;
    debug!(format = format.as_str(), path = %path.display(), "selected output backend");
    match format {
        OutputFormat::Svg => {
            let mut renderer = SvgRenderer::new();
            renderer.render(frame)?;
            renderer.write_svg(path)?;
        }
        OutputFormat::Png => write_png(frame, path)?,
    }
    Ok(format)
}

#[cfg(feature = "cairo-backend")]
fn write_png(frame: &RenderFrame, path: &Path) -> ChartResult<()> {
    let mut renderer = crate::render::CairoRenderer::for_frame(frame)?;
    renderer.render(frame)?;
    renderer.write_png(path)
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_frame: &RenderFrame, _path: &Path) -> ChartResult<()> {
    Err(ChartError::BackendUnavailable("png"))
}

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::charts::ChartKind;
use crate::config::RenderConfig;
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{OutputFormat, RenderFrame, write_frame};

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub kind: ChartKind,
    pub path: PathBuf,
    pub format: OutputFormat,
    pub viewport: Viewport,
}

/// Main facade: turns (kind, payload) into an image file.
///
/// Holds the immutable render configuration; each call is otherwise
/// independent and leaves no state behind.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: RenderConfig,
}

impl ChartRenderer {
    pub fn new(config: RenderConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Lays out a payload without touching the filesystem.
    pub fn build_frame(&self, kind: ChartKind, payload: &Value) -> ChartResult<RenderFrame> {
        let build = kind.frame_builder();
        build(payload, &self.config)
    }

    /// Renders `payload` and writes it to `output_path`, format chosen by
    /// extension.
    ///
    /// The output format and the payload are checked before the file is
    /// created, so invalid input never produces a file.
    pub fn render_to_path(
        &self,
        kind: ChartKind,
        payload: &Value,
        output_path: &Path,
    ) -> ChartResult<RenderedChart> {
        OutputFormat::from_path(output_path)?;
        let frame = self.build_frame(kind, payload)?;
        let format = write_frame(&frame, output_path)?;
        info!(
            kind = kind.as_str(),
            format = format.as_str(),
            path = %output_path.display(),
            "chart written"
        );
        Ok(RenderedChart {
            kind,
            path: output_path.to_path_buf(),
            format,
            viewport: frame.viewport,
        })
    }

    /// Same as [`Self::render_to_path`] for a payload given as JSON text.
    pub fn render_json_to_path(
        &self,
        kind: ChartKind,
        payload_json: &str,
        output_path: &Path,
    ) -> ChartResult<RenderedChart> {
        let payload: Value = serde_json::from_str(payload_json)?;
        if !payload.is_object() {
            return Err(ChartError::payload(
                kind.as_str(),
                "payload must be a JSON object",
            ));
        }
        self.render_to_path(kind, &payload, output_path)
    }
}

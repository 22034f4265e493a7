use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::theme::Theme;

/// Pixel scale applied to every chart's base canvas. 1.5 reproduces the
/// 150 dpi output the report templates were designed around.
pub const DEFAULT_SCALE: f64 = 1.5;

/// Everything a chart build needs besides its payload.
///
/// Serializable so report pipelines can keep a theme file next to their
/// templates instead of patching colors in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub theme: Theme,
    pub scale: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            scale: DEFAULT_SCALE,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            scale: DEFAULT_SCALE,
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "scale must be finite and > 0, got {}",
                self.scale
            )));
        }
        self.theme.validate()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| ChartError::InvalidConfig(format!("failed to parse config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ChartResult<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            ChartError::InvalidConfig(format!("failed to read `{}`: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded render config");
        Self::from_json_str(&raw)
    }
}

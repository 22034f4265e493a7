use serde::Deserialize;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FontWeight, TextVAlign};
use crate::theme::Theme;

use super::{Chart, ChartCanvas, ChartKind};

const TOP_WIDTH: f64 = 8.0;
const MIN_WIDTH: f64 = 1.5;
const MAX_WIDTH_STEP: f64 = 1.5;
const STAGE_PITCH: f64 = 1.8;
const STAGE_HEIGHT: f64 = 1.2;
const STAGE_ALPHA: f64 = 0.9;
const DEFAULT_TITLE: &str = "Conversion Funnel";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunnelStage {
    pub label: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Stacked, narrowing stages of a conversion funnel, widest first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunnelChart {
    pub stages: Vec<FunnelStage>,
    #[serde(default)]
    pub title: Option<String>,
}

impl FunnelChart {
    /// Width lost per stage. Long funnels shrink more gently so the last
    /// stage keeps `MIN_WIDTH`.
    #[must_use]
    pub fn width_step(&self) -> f64 {
        match self.stages.len() {
            0 | 1 => MAX_WIDTH_STEP,
            count => MAX_WIDTH_STEP.min((TOP_WIDTH - MIN_WIDTH) / (count - 1) as f64),
        }
    }

    /// Virtual width of stage `index`.
    #[must_use]
    pub fn stage_width(&self, index: usize) -> f64 {
        TOP_WIDTH - index as f64 * self.width_step()
    }
}

impl Chart for FunnelChart {
    const KIND: ChartKind = ChartKind::FunnelChart;
    const BASE_VIEWPORT: Viewport = Viewport::new(1000, 800);

    fn validate(&self) -> ChartResult<()> {
        if self.stages.is_empty() {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                "`stages` must not be empty",
            ));
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut ChartCanvas, theme: &Theme) -> ChartResult<()> {
        let count = self.stages.len() as f64;
        let top = count * 2.0;
        // The bottom margin keeps the last stage box on the canvas.
        canvas.set_domain((0.0, 10.0), (-0.8, top))?;

        let title = self.title.as_deref().unwrap_or(DEFAULT_TITLE);
        canvas.push_text(
            canvas
                .text(title, 5.0, top - 0.5, 20.0, theme.text)
                .with_v_align(TextVAlign::Top)
                .with_weight(FontWeight::Bold),
        );

        for (index, stage) in self.stages.iter().enumerate() {
            let y = top - 2.0 - index as f64 * STAGE_PITCH;
            let width = self.stage_width(index);
            let x = (10.0 - width) / 2.0;
            let base = theme.funnel_color(index);
            let fill = base.with_alpha(STAGE_ALPHA * base.alpha);
            canvas.push_rect(
                canvas
                    .rect(x, y - STAGE_HEIGHT / 2.0, width, STAGE_HEIGHT, fill)
                    .with_corner_radius(canvas.dx(0.1)),
            );

            let label_y = if stage.value.is_some() { y + 0.2 } else { y };
            canvas.push_text(
                canvas
                    .text(stage.label.as_str(), 5.0, label_y, 14.0, theme.on_fill_text)
                    .with_weight(FontWeight::SemiBold),
            );
            if let Some(value) = &stage.value {
                let color = theme.on_fill_text.with_alpha(STAGE_ALPHA);
                canvas.push_text(canvas.text(value.as_str(), 5.0, y - 0.3, 11.0, color));
            }
        }
        Ok(())
    }
}

use serde::Deserialize;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FontWeight, TextVAlign};
use crate::theme::Theme;

use super::format::format_number;
use super::{Chart, ChartCanvas, ChartKind};

const CENTER: (f64, f64) = (5.0, 2.0);
const RADIUS: f64 = 3.0;
const RING_WIDTH: f64 = 0.4;

/// Half-ring gauge for a 0–100 audit score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreGauge {
    pub score: f64,
    pub title: String,
}

impl ScoreGauge {
    /// Angular extent of the score ring in degrees (0–180).
    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        self.score.clamp(0.0, 100.0) / 100.0 * 180.0
    }
}

impl Chart for ScoreGauge {
    const KIND: ChartKind = ChartKind::ScoreGauge;
    const BASE_VIEWPORT: Viewport = Viewport::new(800, 500);

    fn validate(&self) -> ChartResult<()> {
        if !self.score.is_finite() || !(0.0..=100.0).contains(&self.score) {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                format!("score must be within 0..=100, got {}", self.score),
            ));
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut ChartCanvas, theme: &Theme) -> ChartResult<()> {
        canvas.set_domain((0.0, 10.0), (0.0, 6.0))?;

        if let Some(track) = canvas.ring(CENTER, RADIUS, RING_WIDTH, 0.0, 180.0, theme.track) {
            canvas.push_arc(track);
        }
        // The score fills the ring from the left end towards the right.
        let fill = theme.score_color(self.score);
        if let Some(arc) = canvas.ring(
            CENTER,
            RADIUS,
            RING_WIDTH,
            180.0 - self.sweep_degrees(),
            180.0,
            fill,
        ) {
            canvas.push_arc(arc);
        }

        let score = canvas
            .text(format_number(self.score), CENTER.0, CENTER.1, 72.0, theme.text)
            .with_weight(FontWeight::Bold);
        canvas.push_text(score);
        canvas.push_text(canvas.text("/100", CENTER.0, 1.2, 24.0, theme.muted_text));

        let title = canvas
            .text(self.title.as_str(), 5.0, 5.9, 28.0, theme.text)
            .with_v_align(TextVAlign::Top)
            .with_weight(FontWeight::Bold);
        canvas.push_text(title);
        Ok(())
    }
}

use std::fmt;

use serde::Deserialize;

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{Color, FontWeight};
use crate::theme::Theme;

use super::{Chart, ChartCanvas, ChartKind};

/// Headline value of a metric card: free text or a JSON number shown as-is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Single big number with a label, e.g. "4.2 / AVERAGE RATING / 18 reviews".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MetricCard {
    pub value: MetricValue,
    pub label: String,
    pub sublabel: String,
    /// Value color; the theme's primary color when absent.
    #[serde(default)]
    pub color: Option<Color>,
}

impl Chart for MetricCard {
    const KIND: ChartKind = ChartKind::MetricCard;
    const BASE_VIEWPORT: Viewport = Viewport::new(600, 400);

    fn validate(&self) -> ChartResult<()> {
        if let Some(color) = self.color {
            color.validate()?;
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut ChartCanvas, theme: &Theme) -> ChartResult<()> {
        let card = canvas
            .rect(0.2, 0.7, 9.6, 8.6, theme.background)
            .with_border(theme.track, canvas.points(2.0))
            .with_corner_radius(canvas.dx(0.3));
        canvas.push_rect(card);

        let value_color = self.color.unwrap_or(theme.primary);
        let value = canvas
            .text(self.value.to_string(), 5.0, 6.5, 64.0, value_color)
            .with_weight(FontWeight::Bold);
        canvas.push_text(value);

        let label = canvas
            .text(self.label.to_uppercase(), 5.0, 4.5, 16.0, theme.muted_text)
            .with_weight(FontWeight::SemiBold);
        canvas.push_text(label);
        canvas.push_text(canvas.text(self.sublabel.as_str(), 5.0, 3.5, 12.0, theme.faint_text));
        Ok(())
    }
}

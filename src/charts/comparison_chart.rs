use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::Deserialize;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FontWeight, LineStrokeStyle, RectPrimitive, TextHAlign, TextVAlign};
use crate::theme::Theme;

use super::axis::value_ticks;
use super::format::{format_count, format_number, truncate_label};
use super::{Chart, ChartCanvas, ChartKind, ensure_parallel};

const PLOT_LEFT: f64 = 28.0;
const PLOT_RIGHT: f64 = 92.0;
const PLOT_BOTTOM: f64 = 14.0;
const PLOT_TOP: f64 = 86.0;
const BAR_FILL_RATIO: f64 = 0.6;
const MAX_RATING: f64 = 5.0;
const SUBJECT_BORDER_POINTS: f64 = 2.5;
const PEER_BORDER_POINTS: f64 = 0.5;
const NAME_MAX_CHARS: usize = 28;
const SPINE_POINTS: f64 = 1.0;

/// Which parallel list a comparison chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMetric {
    #[default]
    Ratings,
    Reviews,
}

impl ComparisonMetric {
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Ratings => "ratings",
            Self::Reviews => "reviews",
        }
    }

    const fn default_title(self) -> &'static str {
        match self {
            Self::Ratings => "Rating Comparison",
            Self::Reviews => "Review Count Comparison",
        }
    }

    const fn axis_label(self) -> &'static str {
        match self {
            Self::Ratings => "Average Rating",
            Self::Reviews => "Number of Reviews",
        }
    }

    fn format_value(self, value: f64) -> String {
        match self {
            Self::Ratings => format!("{value:.1}"),
            Self::Reviews => format_count(value),
        }
    }
}

/// Subject business versus competitors on one metric.
///
/// `businesses[0]` is always the subject.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparisonChart {
    pub businesses: Vec<String>,
    #[serde(default)]
    pub metric: ComparisonMetric,
    #[serde(default)]
    pub ratings: Option<Vec<f64>>,
    #[serde(default)]
    pub reviews: Option<Vec<f64>>,
    #[serde(default)]
    pub title: Option<String>,
}

/// One bar of a comparison chart after sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonEntry<'a> {
    pub name: &'a str,
    pub value: f64,
    pub is_subject: bool,
}

impl ComparisonChart {
    /// The list selected by `metric`.
    pub fn values(&self) -> ChartResult<&[f64]> {
        let values = match self.metric {
            ComparisonMetric::Ratings => self.ratings.as_deref(),
            ComparisonMetric::Reviews => self.reviews.as_deref(),
        };
        values.ok_or_else(|| {
            let field = self.metric.field_name();
            ChartError::payload(
                Self::KIND.as_str(),
                format!("`{field}` is required when metric is `{field}`"),
            )
        })
    }

    /// Entries ordered by value, highest first; ties keep input order.
    pub fn ranked_entries(&self) -> ChartResult<Vec<ComparisonEntry<'_>>> {
        let mut entries: Vec<ComparisonEntry<'_>> = self
            .businesses
            .iter()
            .zip(self.values()?)
            .enumerate()
            .map(|(index, (name, value))| ComparisonEntry {
                name,
                value: *value,
                is_subject: index == 0,
            })
            .collect();
        entries.sort_by_key(|entry| Reverse(OrderedFloat(entry.value)));
        Ok(entries)
    }

    fn axis_max(&self, values: &[f64]) -> f64 {
        match self.metric {
            ComparisonMetric::Ratings => MAX_RATING.max(values.iter().copied().fold(0.0, f64::max)),
            ComparisonMetric::Reviews => {
                let max = values.iter().copied().fold(0.0, f64::max);
                if max > 0.0 { max * 1.15 } else { 1.0 }
            }
        }
    }
}

impl Chart for ComparisonChart {
    const KIND: ChartKind = ChartKind::ComparisonChart;
    const BASE_VIEWPORT: Viewport = Viewport::new(1000, 600);

    fn validate(&self) -> ChartResult<()> {
        if self.businesses.is_empty() {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                "`businesses` must not be empty",
            ));
        }
        let values = self.values()?;
        ensure_parallel(
            Self::KIND,
            ("businesses", self.businesses.len()),
            (self.metric.field_name(), values.len()),
        )?;
        if let Some(value) = values.iter().find(|value| !value.is_finite() || **value < 0.0) {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                format!("values must be finite and >= 0, got {value}"),
            ));
        }
        if !self.axis_max(values).is_finite() {
            return Err(ChartError::payload(Self::KIND.as_str(), "values are too large to plot"));
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut ChartCanvas, theme: &Theme) -> ChartResult<()> {
        canvas.set_domain((0.0, 100.0), (0.0, 100.0))?;

        let values = self.values()?;
        let axis_max = self.axis_max(values);
        let to_x = |value: f64| PLOT_LEFT + value / axis_max * (PLOT_RIGHT - PLOT_LEFT);

        let title = self
            .title
            .as_deref()
            .unwrap_or_else(|| self.metric.default_title());
        canvas.push_text(
            canvas
                .text(title, 50.0, 95.0, 18.0, theme.text)
                .with_weight(FontWeight::Bold),
        );

        for tick in value_ticks(axis_max, 5) {
            let x = to_x(tick);
            canvas.push_line(
                canvas
                    .line((x, PLOT_BOTTOM), (x, PLOT_TOP), 0.75, theme.grid_line)
                    .with_stroke_style(LineStrokeStyle::Dashed),
            );
            canvas.push_text(
                canvas
                    .text(format_number(tick), x, PLOT_BOTTOM - 1.5, 10.0, theme.muted_text)
                    .with_v_align(TextVAlign::Top),
            );
        }
        canvas.push_line(canvas.line(
            (PLOT_LEFT, PLOT_BOTTOM),
            (PLOT_RIGHT, PLOT_BOTTOM),
            1.0,
            theme.muted_text,
        ));
        canvas.push_text(
            canvas
                .text(
                    self.metric.axis_label(),
                    (PLOT_LEFT + PLOT_RIGHT) / 2.0,
                    4.0,
                    12.0,
                    theme.text,
                )
                .with_weight(FontWeight::SemiBold),
        );

        let entries = self.ranked_entries()?;
        let slot = (PLOT_TOP - PLOT_BOTTOM) / entries.len() as f64;
        let bar_height = slot * BAR_FILL_RATIO;
        for (row, entry) in entries.iter().enumerate() {
            let center_y = PLOT_TOP - (row as f64 + 0.5) * slot;
            let bar_right = to_x(entry.value);
            let (fill, border, border_points) = if entry.is_subject {
                (theme.primary, theme.text, SUBJECT_BORDER_POINTS)
            } else {
                (theme.secondary, theme.secondary, PEER_BORDER_POINTS)
            };
            let bar = canvas
                .rect(
                    PLOT_LEFT,
                    center_y - bar_height / 2.0,
                    bar_right - PLOT_LEFT,
                    bar_height,
                    fill,
                )
                .with_border(border, canvas.points(border_points));
            canvas.push_rect(bar);

            let weight = if entry.is_subject {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            };
            let mut name = canvas
                .text(
                    truncate_label(entry.name, NAME_MAX_CHARS),
                    PLOT_LEFT - 1.0,
                    center_y,
                    11.0,
                    theme.text,
                )
                .with_weight(weight);
            name.h_align = TextHAlign::Right;
            canvas.push_text(name);

            let mut value = canvas
                .text(
                    self.metric.format_value(entry.value),
                    bar_right + 1.0,
                    center_y,
                    11.0,
                    theme.text,
                )
                .with_weight(FontWeight::SemiBold);
            value.h_align = TextHAlign::Left;
            canvas.push_text(value);
        }

        // Value-axis spine, pushed last so it paints over the bar edges.
        let spine_width = canvas.points(SPINE_POINTS);
        canvas.push_rect(RectPrimitive::new(
            canvas.px(PLOT_LEFT) - spine_width / 2.0,
            canvas.py(PLOT_TOP),
            spine_width,
            canvas.dy(PLOT_TOP - PLOT_BOTTOM),
            theme.muted_text,
        ));
        Ok(())
    }
}

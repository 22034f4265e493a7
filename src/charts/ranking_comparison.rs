use serde::Deserialize;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{FontWeight, LineStrokeStyle, TextHAlign, TextVAlign};
use crate::theme::Theme;

use super::axis::integer_ticks;
use super::format::truncate_label;
use super::{Chart, ChartCanvas, ChartKind, ensure_parallel};

const PLOT_LEFT: f64 = 10.0;
const PLOT_RIGHT: f64 = 96.0;
const PLOT_BOTTOM: f64 = 20.0;
const PLOT_TOP: f64 = 80.0;
const HEADROOM: f64 = 1.12;
const BAR_WIDTH_RATIO: f64 = 0.34;
const QUERY_MAX_CHARS: usize = 24;
const DEFAULT_TITLE: &str = "Search Ranking Comparison";

/// Bar height for a 1-based rank: the best rank gets the tallest bar.
///
/// `rank` must be within `1..=max_rank`.
#[must_use]
pub const fn rank_to_bar_height(rank: u32, max_rank: u32) -> u32 {
    max_rank - rank + 1
}

/// Inverse of [`rank_to_bar_height`], used for axis tick labels.
#[must_use]
pub const fn bar_height_to_rank(height: u32, max_rank: u32) -> u32 {
    max_rank - height + 1
}

/// Subject's search positions next to the top competitor's, per query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RankingComparison {
    pub queries: Vec<String>,
    pub your_positions: Vec<u32>,
    pub competitor_positions: Vec<u32>,
    #[serde(default)]
    pub title: Option<String>,
}

impl RankingComparison {
    /// Worst position across both series; the rank axis spans `1..=max_rank`.
    #[must_use]
    pub fn max_rank(&self) -> u32 {
        self.your_positions
            .iter()
            .chain(&self.competitor_positions)
            .copied()
            .max()
            .unwrap_or(1)
    }

    /// Rank-axis ticks as `(bar height, displayed rank)` pairs.
    #[must_use]
    pub fn rank_ticks(&self) -> Vec<(u32, u32)> {
        let max_rank = self.max_rank();
        integer_ticks(max_rank, 5)
            .into_iter()
            .map(|height| (height, bar_height_to_rank(height, max_rank)))
            .collect()
    }
}

impl Chart for RankingComparison {
    const KIND: ChartKind = ChartKind::RankingComparison;
    const BASE_VIEWPORT: Viewport = Viewport::new(1000, 600);

    fn validate(&self) -> ChartResult<()> {
        if self.queries.is_empty() {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                "`queries` must not be empty",
            ));
        }
        ensure_parallel(
            Self::KIND,
            ("queries", self.queries.len()),
            ("your_positions", self.your_positions.len()),
        )?;
        ensure_parallel(
            Self::KIND,
            ("queries", self.queries.len()),
            ("competitor_positions", self.competitor_positions.len()),
        )?;
        if self
            .your_positions
            .iter()
            .chain(&self.competitor_positions)
            .any(|position| *position == 0)
        {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                "positions are 1-based and must be >= 1",
            ));
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut ChartCanvas, theme: &Theme) -> ChartResult<()> {
        canvas.set_domain((0.0, 100.0), (0.0, 100.0))?;

        let max_rank = self.max_rank();
        let height_span = f64::from(max_rank) * HEADROOM;
        let to_y = |height: u32| {
            PLOT_BOTTOM + f64::from(height) / height_span * (PLOT_TOP - PLOT_BOTTOM)
        };

        let title = self.title.as_deref().unwrap_or(DEFAULT_TITLE);
        canvas.push_text(
            canvas
                .text(title, 50.0, 95.0, 18.0, theme.text)
                .with_weight(FontWeight::Bold),
        );

        for (height, rank) in self.rank_ticks() {
            let y = to_y(height);
            canvas.push_line(
                canvas
                    .line((PLOT_LEFT, y), (PLOT_RIGHT, y), 0.75, theme.grid_line)
                    .with_stroke_style(LineStrokeStyle::Dashed),
            );
            let mut label =
                canvas.text(format!("#{rank}"), PLOT_LEFT - 1.0, y, 10.0, theme.muted_text);
            label.h_align = TextHAlign::Right;
            canvas.push_text(label);
        }
        canvas.push_line(canvas.line(
            (PLOT_LEFT, PLOT_BOTTOM),
            (PLOT_RIGHT, PLOT_BOTTOM),
            1.0,
            theme.muted_text,
        ));
        canvas.push_line(canvas.line(
            (PLOT_LEFT, PLOT_BOTTOM),
            (PLOT_LEFT, PLOT_TOP),
            1.0,
            theme.muted_text,
        ));
        let mut axis_title = canvas.text(
            "Search position (1 = best)",
            PLOT_LEFT,
            PLOT_TOP + 3.0,
            10.0,
            theme.muted_text,
        );
        axis_title.h_align = TextHAlign::Left;
        canvas.push_text(axis_title);

        let slot = (PLOT_RIGHT - PLOT_LEFT) / self.queries.len() as f64;
        let bar_width = slot * BAR_WIDTH_RATIO;
        let series = [
            (&self.your_positions, theme.primary, -bar_width),
            (&self.competitor_positions, theme.secondary, 0.0),
        ];
        for (index, query) in self.queries.iter().enumerate() {
            let center_x = PLOT_LEFT + (index as f64 + 0.5) * slot;
            for (positions, fill, offset) in &series {
                let rank = positions[index];
                let top = to_y(rank_to_bar_height(rank, max_rank));
                let left = center_x + offset;
                let bar = canvas.rect(left, PLOT_BOTTOM, bar_width, top - PLOT_BOTTOM, *fill);
                canvas.push_rect(bar);
                let label_x = left + bar_width / 2.0;
                canvas.push_text(
                    canvas
                        .text(format!("#{rank}"), label_x, top + 1.0, 10.0, theme.text)
                        .with_v_align(TextVAlign::Bottom)
                        .with_weight(FontWeight::SemiBold),
                );
            }
            canvas.push_text(
                canvas
                    .text(
                        truncate_label(query, QUERY_MAX_CHARS),
                        center_x,
                        PLOT_BOTTOM - 2.0,
                        10.0,
                        theme.text,
                    )
                    .with_v_align(TextVAlign::Top),
            );
        }

        for (slot_index, (label, swatch)) in [
            ("Your business", theme.primary),
            ("Top competitor", theme.secondary),
        ]
        .into_iter()
        .enumerate()
        {
            let x = 62.0 + slot_index as f64 * 18.0;
            canvas.push_rect(canvas.rect(x, 86.5, 1.6, 2.6, swatch));
            let mut text = canvas.text(label, x + 2.4, 87.8, 10.0, theme.text);
            text.h_align = TextHAlign::Left;
            canvas.push_text(text);
        }
        Ok(())
    }
}

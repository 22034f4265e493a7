//! Payload types and frame builders, one module per chart kind.

mod axis;
mod canvas;
mod comparison_chart;
pub mod format;
mod funnel_chart;
mod heat_map;
mod kind;
mod metric_card;
mod ranking_comparison;
mod revenue_opportunity;
mod score_gauge;

pub use canvas::ChartCanvas;
pub use comparison_chart::{ComparisonChart, ComparisonEntry, ComparisonMetric};
pub use funnel_chart::{FunnelChart, FunnelStage};
pub use heat_map::{GridCell, HeatMap, NOT_RANKING_GLYPH};
pub use kind::{ChartKind, FrameBuilder};
pub use metric_card::{MetricCard, MetricValue};
pub use ranking_comparison::{RankingComparison, bar_height_to_rank, rank_to_bar_height};
pub use revenue_opportunity::RevenueOpportunity;
pub use score_gauge::ScoreGauge;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::RenderConfig;
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;
use crate::theme::Theme;

/// A typed chart payload that knows how to lay itself out.
pub trait Chart: DeserializeOwned {
    const KIND: ChartKind;

    /// Canvas size at scale 1.0.
    const BASE_VIEWPORT: Viewport;

    /// Checks the invariants serde cannot express (parallel list lengths,
    /// value ranges, grid shape).
    fn validate(&self) -> ChartResult<()>;

    fn draw(&self, canvas: &mut ChartCanvas, theme: &Theme) -> ChartResult<()>;
}

/// Validates `chart` and lays it out into a frame.
pub fn build_chart<C: Chart>(chart: &C, config: &RenderConfig) -> ChartResult<RenderFrame> {
    config.validate()?;
    chart.validate()?;

    let mut canvas = ChartCanvas::new(C::BASE_VIEWPORT, config.scale, config.theme.background)?;
    chart.draw(&mut canvas, &config.theme)?;
    let frame = canvas.into_frame();
    frame.validate()?;

    debug!(
        kind = C::KIND.as_str(),
        width = frame.viewport.width,
        height = frame.viewport.height,
        lines = frame.lines.len(),
        rects = frame.rects.len(),
        arcs = frame.arcs.len(),
        texts = frame.texts.len(),
        "chart frame built"
    );
    Ok(frame)
}

pub(crate) fn build_from_value<C: Chart>(
    payload: &Value,
    config: &RenderConfig,
) -> ChartResult<RenderFrame> {
    let chart = C::deserialize(payload)
        .map_err(|err| ChartError::payload(C::KIND.as_str(), err.to_string()))?;
    build_chart(&chart, config)
}

pub(crate) fn ensure_parallel(
    kind: ChartKind,
    reference: (&str, usize),
    other: (&str, usize),
) -> ChartResult<()> {
    if reference.1 != other.1 {
        return Err(ChartError::payload(
            kind.as_str(),
            format!(
                "`{}` has {} entries but `{}` has {}",
                other.0, other.1, reference.0, reference.1
            ),
        ));
    }
    Ok(())
}

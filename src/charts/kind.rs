use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::config::RenderConfig;
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

use super::{
    ComparisonChart, FunnelChart, HeatMap, MetricCard, RankingComparison, RevenueOpportunity,
    ScoreGauge, build_from_value,
};

/// Builds a validated frame from a JSON payload.
pub type FrameBuilder = fn(&Value, &RenderConfig) -> ChartResult<RenderFrame>;

/// Closed set of chart kinds the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    ScoreGauge,
    MetricCard,
    ComparisonChart,
    RankingComparison,
    HeatMap,
    FunnelChart,
    RevenueOpportunity,
}

impl ChartKind {
    pub const ALL: [Self; 7] = [
        Self::ScoreGauge,
        Self::MetricCard,
        Self::ComparisonChart,
        Self::RankingComparison,
        Self::HeatMap,
        Self::FunnelChart,
        Self::RevenueOpportunity,
    ];

    /// Command-line tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ScoreGauge => "score_gauge",
            Self::MetricCard => "metric_card",
            Self::ComparisonChart => "comparison_chart",
            Self::RankingComparison => "ranking_comparison",
            Self::HeatMap => "heat_map",
            Self::FunnelChart => "funnel_chart",
            Self::RevenueOpportunity => "revenue_opportunity",
        }
    }

    #[must_use]
    pub fn frame_builder(self) -> FrameBuilder {
        match self {
            Self::ScoreGauge => build_from_value::<ScoreGauge>,
            Self::MetricCard => build_from_value::<MetricCard>,
            Self::ComparisonChart => build_from_value::<ComparisonChart>,
            Self::RankingComparison => build_from_value::<RankingComparison>,
            Self::HeatMap => build_from_value::<HeatMap>,
            Self::FunnelChart => build_from_value::<FunnelChart>,
            Self::RevenueOpportunity => build_from_value::<RevenueOpportunity>,
        }
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(tag: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .ok_or_else(|| ChartError::UnknownChartKind(tag.to_owned()))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

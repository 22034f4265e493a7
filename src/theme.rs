//! Brand theme passed into every chart build.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Scores at or above this value are rated good.
pub const GOOD_SCORE_THRESHOLD: f64 = 70.0;
/// Scores at or above this value (and below good) are rated warn.
pub const WARN_SCORE_THRESHOLD: f64 = 40.0;

/// Best rank still rated good on the heat map.
pub const GOOD_RANK_LIMIT: u32 = 3;
/// Worst rank still rated warn on the heat map.
pub const WARN_RANK_LIMIT: u32 = 10;

/// Three-tier quality classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Good,
    Warn,
    Bad,
}

impl Severity {
    /// Classifies a 0–100 score. NaN is rated bad.
    #[must_use]
    pub fn for_score(score: f64) -> Self {
        if score >= GOOD_SCORE_THRESHOLD {
            Self::Good
        } else if score >= WARN_SCORE_THRESHOLD {
            Self::Warn
        } else {
            Self::Bad
        }
    }

    /// Classifies a 1-based search position.
    #[must_use]
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            0..=GOOD_RANK_LIMIT => Self::Good,
            _ if rank <= WARN_RANK_LIMIT => Self::Warn,
            _ => Self::Bad,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityPalette {
    pub good: Color,
    pub warn: Color,
    pub bad: Color,
}

impl Default for SeverityPalette {
    fn default() -> Self {
        Self {
            good: TEAL,
            warn: ORANGE,
            bad: Color::from_rgb8(0xEF, 0x44, 0x44),
        }
    }
}

impl SeverityPalette {
    #[must_use]
    pub fn color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Good => self.good,
            Severity::Warn => self.warn,
            Severity::Bad => self.bad,
        }
    }
}

const ORANGE: Color = Color::from_rgb8(0xFF, 0x6B, 0x35);
const TEAL: Color = Color::from_rgb8(0x2D, 0xD4, 0xBF);

/// Immutable set of colors used by every chart kind.
///
/// `primary` marks the subject business ("self"), `secondary` everything it
/// is compared against. Every field has a default, so a theme file only
/// needs the colors it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub muted_text: Color,
    pub faint_text: Color,
    pub on_fill_text: Color,
    pub track: Color,
    pub grid_line: Color,
    pub unranked: Color,
    pub callout_fill: Color,
    pub severity: SeverityPalette,
    pub funnel_palette: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: ORANGE,
            secondary: TEAL,
            background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            text: Color::from_rgb8(0x1F, 0x29, 0x37),
            muted_text: Color::from_rgb8(0x6B, 0x72, 0x80),
            faint_text: Color::from_rgb8(0x9C, 0xA3, 0xAF),
            on_fill_text: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            track: Color::from_rgb8(0xF3, 0xF4, 0xF6),
            grid_line: Color::from_rgb8(0xD1, 0xD5, 0xDB),
            unranked: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            callout_fill: Color::from_rgb8(0xFE, 0xF3, 0xC7),
            severity: SeverityPalette::default(),
            funnel_palette: vec![
                ORANGE,
                TEAL,
                Color::from_rgb8(0xFF, 0xA5, 0x00),
                Color::from_rgb8(0x20, 0xB2, 0xAA),
            ],
        }
    }
}

impl Theme {
    #[must_use]
    pub fn severity_color(&self, severity: Severity) -> Color {
        self.severity.color(severity)
    }

    #[must_use]
    pub fn score_color(&self, score: f64) -> Color {
        self.severity_color(Severity::for_score(score))
    }

    /// Funnel stage color, cycling through the palette.
    #[must_use]
    pub fn funnel_color(&self, stage_index: usize) -> Color {
        if self.funnel_palette.is_empty() {
            return self.primary;
        }
        self.funnel_palette[stage_index % self.funnel_palette.len()]
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.primary,
            self.secondary,
            self.background,
            self.text,
            self.muted_text,
            self.faint_text,
            self.on_fill_text,
            self.track,
            self.grid_line,
            self.unranked,
            self.callout_fill,
            self.severity.good,
            self.severity.warn,
            self.severity.bad,
        ]
        .into_iter()
        .chain(self.funnel_palette.iter().copied())
        {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
        }
        Ok(())
    }
}

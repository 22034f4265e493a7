use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, FontWeight, TextHAlign, TextVAlign};
use crate::theme::{GOOD_RANK_LIMIT, Severity, Theme, WARN_RANK_LIMIT};

use super::{Chart, ChartCanvas, ChartKind};

/// Glyph drawn in cells where the business does not rank.
pub const NOT_RANKING_GLYPH: &str = "×";

const GRID_LEFT: f64 = 1.0;
const GRID_WIDTH: f64 = 8.0;
const GRID_CENTER_Y: f64 = 5.5;
const GRID_HEIGHT: f64 = 6.6;
const CELL_GAP_RATIO: f64 = 0.06;

/// One sample point of the local ranking grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Ranked(u32),
    Unranked,
}

impl GridCell {
    #[must_use]
    pub fn fill_color(self, theme: &Theme) -> Color {
        match self {
            Self::Ranked(rank) => theme.severity_color(Severity::for_rank(rank)),
            Self::Unranked => theme.unranked,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Ranked(rank) => rank.to_string(),
            Self::Unranked => NOT_RANKING_GLYPH.to_owned(),
        }
    }
}

/// `null` is `Unranked`; numbers must be within `1..=u32::MAX` and are rounded to whole
/// positions because callers often derive cells from an average.
impl<'de> Deserialize<'de> for GridCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let valid = 1.0..=f64::from(u32::MAX);
        match Option::<f64>::deserialize(deserializer)? {
            None => Ok(Self::Unranked),
            Some(position) if valid.contains(&position) => {
                Ok(Self::Ranked(position.round() as u32))
            }
            Some(position) => Err(D::Error::custom(format!(
                "grid positions must be within 1..={} or null, got {position}",
                u32::MAX
            ))),
        }
    }
}

/// Geographic grid of search positions around the business location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeatMap {
    pub grid: Vec<Vec<GridCell>>,
    pub title: String,
    pub center_label: String,
}

impl HeatMap {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Row/column of the cell drawn as the business location.
    #[must_use]
    pub fn center_cell(&self) -> (usize, usize) {
        (self.rows() / 2, self.columns() / 2)
    }

    /// Cell edge in virtual units: the largest square that fits the grid area.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        let columns = self.columns().max(1) as f64;
        let rows = self.rows().max(1) as f64;
        (GRID_WIDTH / columns).min(GRID_HEIGHT / rows)
    }
}

impl Chart for HeatMap {
    const KIND: ChartKind = ChartKind::HeatMap;
    const BASE_VIEWPORT: Viewport = Viewport::new(800, 800);

    fn validate(&self) -> ChartResult<()> {
        let columns = self.columns();
        if self.grid.is_empty() || columns == 0 {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                "`grid` must have at least one row and one column",
            ));
        }
        if let Some((index, row)) = self
            .grid
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns)
        {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                format!(
                    "grid row {index} has {} columns, expected {columns}",
                    row.len()
                ),
            ));
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut ChartCanvas, theme: &Theme) -> ChartResult<()> {
        canvas.push_text(
            canvas
                .text(self.title.as_str(), 5.0, 9.6, 18.0, theme.text)
                .with_v_align(TextVAlign::Top)
                .with_weight(FontWeight::Bold),
        );

        let cell = self.cell_size();
        let gap = cell * CELL_GAP_RATIO;
        let grid_left = GRID_LEFT + (GRID_WIDTH - cell * self.columns() as f64) / 2.0;
        let grid_top = GRID_CENTER_Y + cell * self.rows() as f64 / 2.0;
        let grid_bottom = grid_top - cell * self.rows() as f64;
        let label_px = canvas.dx(cell) * 0.32;
        let center = self.center_cell();

        for (row_index, row) in self.grid.iter().enumerate() {
            for (column_index, grid_cell) in row.iter().enumerate() {
                let x = grid_left + column_index as f64 * cell;
                let y = grid_top - (row_index as f64 + 1.0) * cell;
                let inset = gap / 2.0;
                let fill = grid_cell.fill_color(theme);
                let mut rect = canvas
                    .rect(x + inset, y + inset, cell - gap, cell - gap, fill)
                    .with_corner_radius(canvas.dx(gap));
                if (row_index, column_index) == center {
                    rect = rect.with_border(theme.text, canvas.points(3.0));
                }
                canvas.push_rect(rect);

                let (label_color, weight) = match grid_cell {
                    GridCell::Ranked(_) => (theme.on_fill_text, FontWeight::Bold),
                    GridCell::Unranked => (theme.muted_text, FontWeight::Normal),
                };
                let (label_x, label_y) = (x + cell / 2.0, y + cell / 2.0);
                canvas.push_text(
                    canvas
                        .text_px(grid_cell.label(), label_x, label_y, label_px, label_color)
                        .with_weight(weight),
                );
            }
        }

        canvas.push_text(
            canvas
                .text(self.center_label.as_str(), 5.0, grid_bottom - 0.35, 12.0, theme.muted_text)
                .with_v_align(TextVAlign::Top)
                .with_weight(FontWeight::SemiBold),
        );

        let legend = [
            (format!("Top {GOOD_RANK_LIMIT}"), theme.severity.good),
            (
                format!("{}-{WARN_RANK_LIMIT}", GOOD_RANK_LIMIT + 1),
                theme.severity.warn,
            ),
            (format!("{}+", WARN_RANK_LIMIT + 1), theme.severity.bad),
            ("Not ranking".to_owned(), theme.unranked),
        ];
        for (index, (label, swatch)) in legend.into_iter().enumerate() {
            let x = 1.0 + index as f64 * 2.1;
            canvas.push_rect(canvas.rect(x, 0.85, 0.35, 0.35, swatch));
            let mut text = canvas.text(label, x + 0.5, 1.025, 10.0, theme.text);
            text.h_align = TextHAlign::Left;
            canvas.push_text(text);
        }
        Ok(())
    }
}

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::FontWeight;
use crate::theme::Theme;

use super::format::format_currency;
use super::{Chart, ChartCanvas, ChartKind};

const TITLE: &str = "Estimated Monthly Revenue Recovery";
const SUBTITLE: &str = "Based on current lead volume and conversion gaps";

/// Callout card for the estimated monthly revenue a business could recover.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenueOpportunity {
    pub monthly_recovery: Decimal,
}

impl RevenueOpportunity {
    #[must_use]
    pub fn amount_label(&self) -> String {
        format_currency(self.monthly_recovery)
    }
}

impl Chart for RevenueOpportunity {
    const KIND: ChartKind = ChartKind::RevenueOpportunity;
    const BASE_VIEWPORT: Viewport = Viewport::new(1000, 600);

    fn validate(&self) -> ChartResult<()> {
        if self.monthly_recovery.is_sign_negative() && !self.monthly_recovery.is_zero() {
            return Err(ChartError::payload(
                Self::KIND.as_str(),
                format!(
                    "monthly_recovery must be >= 0, got {}",
                    self.monthly_recovery
                ),
            ));
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut ChartCanvas, theme: &Theme) -> ChartResult<()> {
        let card = canvas
            .rect(0.2, 1.7, 9.6, 6.6, theme.callout_fill)
            .with_border(theme.primary, canvas.points(3.0))
            .with_corner_radius(canvas.dx(0.3));
        canvas.push_rect(card);

        canvas.push_text(
            canvas
                .text(TITLE, 5.0, 7.0, 18.0, theme.text)
                .with_weight(FontWeight::Bold),
        );
        canvas.push_text(
            canvas
                .text(self.amount_label(), 5.0, 5.0, 56.0, theme.primary)
                .with_weight(FontWeight::Bold),
        );
        canvas.push_text(
            canvas
                .text(SUBTITLE, 5.0, 3.5, 12.0, theme.muted_text)
                .italic(),
        );
        Ok(())
    }
}

use crate::error::{ChartError, ChartResult};

/// Affine mapping from a data/virtual domain onto a pixel range.
///
/// The pixel range is supplied per call so one scale can serve both a
/// left-to-right x axis and a bottom-to-top (flipped) y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    /// Maps `value` onto `[pixel_start, pixel_end]`.
    ///
    /// Non-finite input yields non-finite output; frame validation rejects it
    /// before anything is drawn.
    #[must_use]
    pub fn domain_to_pixel(self, value: f64, pixel_start: f64, pixel_end: f64) -> f64 {
        let normalized = (value - self.domain_start) / self.span();
        pixel_start + normalized * (pixel_end - pixel_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64, pixel_start: f64, pixel_end: f64) -> f64 {
        let normalized = (pixel - pixel_start) / (pixel_end - pixel_start);
        self.domain_start + normalized * self.span()
    }
}

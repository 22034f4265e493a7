use serde::{Deserialize, Serialize};

/// Pixel size of one output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Scales both dimensions, rounding to whole pixels.
    ///
    /// Returns an invalid (zero-sized) viewport when `factor` is not a
    /// positive finite number so callers surface the error through
    /// `is_valid`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return Self::new(0, 0);
        }
        let scale = |value: u32| {
            let scaled = (f64::from(value) * factor).round();
            if scaled >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                scaled as u32
            }
        };
        Self::new(scale(self.width), scale(self.height))
    }
}

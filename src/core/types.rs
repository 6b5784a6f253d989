use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Canvas size and the margin kept free around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl CanvasGeometry {
    #[must_use]
    pub const fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.margin.is_finite()
            && self.margin >= 0.0
            && self.width > 2.0 * self.margin
            && self.height > 2.0 * self.margin
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidGeometry {
                width: self.width,
                height: self.height,
                margin: self.margin,
            })
        }
    }

    /// Right edge of the plot area.
    #[must_use]
    pub fn plot_right(self) -> f64 {
        self.width - self.margin
    }

    /// Bottom edge of the plot area.
    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        self.height - self.margin
    }
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self::new(1000.0, 600.0, 20.0)
    }
}

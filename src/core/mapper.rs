use crate::core::{CanvasGeometry, Rank};

/// Worst rank tracked by the source tables; unranked years are drawn here.
pub const DEFAULT_MAX_RANK: u32 = 1000;

/// Maps (year index, rank) pairs to canvas pixels.
///
/// Neither mapping fails: the caller keeps `index` below `year_count`, and
/// ranks outside `1..=max_rank` are clamped into the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    margin: f64,
    year_count: usize,
    max_rank: u32,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(margin: f64, year_count: usize, max_rank: u32) -> Self {
        Self {
            margin,
            year_count: year_count.max(1),
            max_rank: max_rank.max(1),
        }
    }

    #[must_use]
    pub fn margin(self) -> f64 {
        self.margin
    }

    #[must_use]
    pub fn year_count(self) -> usize {
        self.year_count
    }

    #[must_use]
    pub fn max_rank(self) -> u32 {
        self.max_rank
    }

    /// X of the vertical gridline for the year at `index`.
    #[must_use]
    pub fn x_for_year_index(self, width: f64, index: usize) -> f64 {
        debug_assert!(index < self.year_count, "year index out of range");
        let spacing = (width - 2.0 * self.margin) / self.year_count as f64;
        self.margin + index as f64 * spacing
    }

    /// Y for `rank`, clamped to `[margin, height - margin]`.
    #[must_use]
    pub fn y_for_rank(self, height: f64, rank: f64) -> f64 {
        let y = rank * height / f64::from(self.max_rank);
        y.max(self.margin).min(height - self.margin)
    }

    /// Pixel position of `rank` at the year with `index`.
    #[must_use]
    pub fn point_for(self, geometry: CanvasGeometry, index: usize, rank: Rank) -> (f64, f64) {
        (
            self.x_for_year_index(geometry.width, index),
            self.y_for_rank(geometry.height, rank.plot_value(self.max_rank)),
        )
    }
}

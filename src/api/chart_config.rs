use serde::{Deserialize, Serialize};

use crate::core::{CanvasGeometry, DEFAULT_MAX_RANK, Palette, YearAxis};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Chart setup shared by every redraw.
///
/// Serializable so hosts can keep the layout in a JSON file; every field
/// falls back to the classic decade chart when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendChartConfig {
    pub geometry: CanvasGeometry,
    pub years: YearAxis,
    pub palette: Palette,
    /// Horizontal gap between a point and its label.
    pub text_dx: f64,
    pub line_width: f64,
    pub grid_line_width: f64,
    pub grid_color: Color,
    pub label_font_size_px: f64,
    /// Worst rank in the source data; unranked years are drawn at this rank.
    pub max_rank: u32,
    pub unranked_glyph: String,
}

impl TrendChartConfig {
    #[must_use]
    pub fn new(geometry: CanvasGeometry, years: YearAxis) -> Self {
        Self {
            geometry,
            years,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_text_dx(mut self, text_dx: f64) -> Self {
        self.text_dx = text_dx;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_grid_style(mut self, color: Color, line_width: f64) -> Self {
        self.grid_color = color;
        self.grid_line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_label_font_size(mut self, font_size_px: f64) -> Self {
        self.label_font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_max_rank(mut self, max_rank: u32) -> Self {
        self.max_rank = max_rank;
        self
    }

    #[must_use]
    pub fn with_unranked_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.unranked_glyph = glyph.into();
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;
        self.grid_color.validate()?;
        for color in self.palette.colors() {
            color.validate()?;
        }
        for (field, value) in [
            ("line_width", self.line_width),
            ("grid_line_width", self.grid_line_width),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "`{field}` must be finite and > 0"
                )));
            }
        }
        if !self.text_dx.is_finite() {
            return Err(ChartError::InvalidData(
                "`text_dx` must be finite".to_owned(),
            ));
        }
        if self.max_rank == 0 {
            return Err(ChartError::InvalidData(
                "`max_rank` must be > 0".to_owned(),
            ));
        }
        if self.unranked_glyph.is_empty() {
            return Err(ChartError::InvalidData(
                "`unranked_glyph` must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for TrendChartConfig {
    fn default() -> Self {
        Self {
            geometry: CanvasGeometry::default(),
            years: YearAxis::decades(),
            palette: Palette::default(),
            text_dx: 2.0,
            line_width: 1.0,
            grid_line_width: 1.0,
            grid_color: Color::BLACK,
            label_font_size_px: 12.0,
            max_rank: DEFAULT_MAX_RANK,
            unranked_glyph: "*".to_owned(),
        }
    }
}

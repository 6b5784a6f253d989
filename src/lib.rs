//! name-trends: popularity-rank trend chart for names across decades.
//!
//! The chart maps `(year, rank)` samples onto a fixed grid and emits line and
//! text primitives onto any `render::DrawingSink`, so the drawing logic stays
//! independent of the windowing toolkit that hosts it.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{TrendChart, TrendChartConfig};
pub use error::{ChartError, ChartResult};

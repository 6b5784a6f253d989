mod chart_config;
mod trend_chart;

pub use chart_config::TrendChartConfig;
pub use trend_chart::{SeriesPoint, TrendChart};

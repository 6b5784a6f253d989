pub mod mapper;
pub mod palette;
pub mod rank;
pub mod types;
pub mod year_axis;

pub use mapper::{CoordinateMapper, DEFAULT_MAX_RANK};
pub use palette::Palette;
pub use rank::{NameLookup, NameSeries, Rank, parse_rank};
pub use types::CanvasGeometry;
pub use year_axis::YearAxis;

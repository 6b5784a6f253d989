mod frame;
mod primitives;
mod recording_sink;
mod sink;

pub use frame::{DrawCommand, RenderFrame};
pub use primitives::{Color, LinePrimitive, TextAnchor, TextPrimitive};
pub use recording_sink::RecordingSink;
pub use sink::DrawingSink;

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoSink};

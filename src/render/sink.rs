use crate::error::ChartResult;
use crate::render::{LinePrimitive, TextPrimitive};

/// Drawing surface the chart paints onto.
///
/// Implementations are mutated by one redraw at a time; every redraw starts
/// with `clear`.
pub trait DrawingSink {
    /// Erases everything drawn so far.
    fn clear(&mut self) -> ChartResult<()>;

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

impl<S: DrawingSink + ?Sized> DrawingSink for &mut S {
    fn clear(&mut self) -> ChartResult<()> {
        (**self).clear()
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        (**self).draw_line(line)
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        (**self).draw_text(text)
    }
}

use crate::core::CanvasGeometry;
use crate::error::ChartResult;
use crate::render::{DrawingSink, LinePrimitive, RenderFrame, TextPrimitive};

/// In-memory sink used by tests and headless runs.
///
/// It validates every primitive so invalid geometry is caught without a real
/// backend, and keeps what the latest redraw produced.
#[derive(Debug)]
pub struct RecordingSink {
    frame: RenderFrame,
    pub clear_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl RecordingSink {
    #[must_use]
    pub fn new(geometry: CanvasGeometry) -> Self {
        Self {
            frame: RenderFrame::new(geometry),
            clear_count: 0,
            last_line_count: 0,
            last_text_count: 0,
        }
    }

    /// Primitives drawn since the last clear.
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn into_frame(self) -> RenderFrame {
        self.frame
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new(CanvasGeometry::default())
    }
}

impl DrawingSink for RecordingSink {
    fn clear(&mut self) -> ChartResult<()> {
        self.frame.clear()?;
        self.clear_count += 1;
        self.last_line_count = 0;
        self.last_text_count = 0;
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        self.frame.draw_line(line)?;
        self.last_line_count += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        self.frame.draw_text(text)?;
        self.last_text_count += 1;
        Ok(())
    }
}

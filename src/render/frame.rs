use serde::{Deserialize, Serialize};

use crate::core::CanvasGeometry;
use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSink, LinePrimitive, TextPrimitive};

/// One primitive in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line(LinePrimitive),
    Text(TextPrimitive),
}

/// Backend-agnostic scene for one chart draw pass.
///
/// A frame is itself a `DrawingSink`: drawing into it records the commands,
/// and `replay` paints them onto any other sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub geometry: CanvasGeometry,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(geometry: CanvasGeometry) -> Self {
        Self {
            geometry,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.commands.push(DrawCommand::Line(line));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.commands.push(DrawCommand::Text(text));
        self
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            DrawCommand::Text(_) => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            DrawCommand::Line(_) => None,
        })
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.texts().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.geometry.validate()?;
        for command in &self.commands {
            match command {
                DrawCommand::Line(line) => line.validate()?,
                DrawCommand::Text(text) => text.validate()?,
            }
        }
        Ok(())
    }

    /// Clears `sink` and paints every command in order.
    pub fn replay<S: DrawingSink + ?Sized>(&self, sink: &mut S) -> ChartResult<()> {
        sink.clear()?;
        for command in &self.commands {
            match command {
                DrawCommand::Line(line) => sink.draw_line(line)?,
                DrawCommand::Text(text) => sink.draw_text(text)?,
            }
        }
        Ok(())
    }

    /// Serializes the frame to pretty JSON for snapshots and debugging.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize frame: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse frame: {e}")))
    }
}

impl DrawingSink for RenderFrame {
    fn clear(&mut self) -> ChartResult<()> {
        self.commands.clear();
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        self.commands.push(DrawCommand::Line(*line));
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        self.commands.push(DrawCommand::Text(text.clone()));
        Ok(())
    }
}

use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSink, LinePrimitive, TextPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango sink painting onto an offscreen image surface.
pub struct CairoSink {
    surface: ImageSurface,
    context: Context,
    clear_color: Color,
    stats: CairoRenderStats,
}

impl CairoSink {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            clear_color: Color::WHITE,
            stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Counts since the last clear.
    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        self.surface.flush();
        let mut file = File::create(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to encode png: {err}")))?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }
}

impl DrawingSink for CairoSink {
    fn clear(&mut self) -> ChartResult<()> {
        apply_color(&self.context, self.clear_color);
        self.context.set_operator(Operator::Source);
        let painted = self.context.paint();
        self.context.set_operator(Operator::Over);
        painted.map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.stats = CairoRenderStats::default();
        Ok(())
    }

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()> {
        line.validate()?;
        apply_color(&self.context, line.color);
        self.context.set_line_width(line.stroke_width);
        self.context.move_to(line.x1, line.y1);
        self.context.line_to(line.x2, line.y2);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        text.validate()?;
        let layout = pangocairo::functions::create_layout(&self.context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let (dx, dy) = text
            .anchor
            .top_left_offset(f64::from(text_width), f64::from(text_height));

        apply_color(&self.context, text.color);
        self.context.move_to(text.x + dx, text.y + dy);
        pangocairo::functions::show_layout(&self.context, &layout);
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}

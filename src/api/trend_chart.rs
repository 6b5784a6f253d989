use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{CoordinateMapper, NameLookup, NameSeries, Rank};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawingSink, LinePrimitive, RenderFrame, TextAnchor, TextPrimitive,
};

use super::TrendChartConfig;

/// One plotted year of a name series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub year: i32,
    pub x: f64,
    pub y: f64,
    pub rank: Rank,
}

/// Draws the decade grid and the rank polylines of the selected names.
///
/// The chart owns only immutable configuration; the selection is passed on
/// each redraw and every redraw repaints the whole sink.
#[derive(Debug, Clone)]
pub struct TrendChart {
    config: TrendChartConfig,
    mapper: CoordinateMapper,
}

impl TrendChart {
    pub fn new(config: TrendChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let mapper = CoordinateMapper::new(
            config.geometry.margin,
            config.years.len(),
            config.max_rank,
        );
        Ok(Self { config, mapper })
    }

    #[must_use]
    pub fn config(&self) -> &TrendChartConfig {
        &self.config
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    /// Color assigned to the `slot`-th selected name.
    #[must_use]
    pub fn series_color(&self, slot: usize) -> Color {
        self.config.palette.color_for(slot)
    }

    /// Maps every year of `series` to its pixel position.
    #[must_use]
    pub fn project_series(&self, series: &NameSeries) -> SmallVec<[SeriesPoint; 16]> {
        let geometry = self.config.geometry;
        self.config
            .years
            .iter()
            .enumerate()
            .map(|(index, year)| {
                let rank = series.rank_for(year);
                let (x, y) = self.mapper.point_for(geometry, index, rank);
                SeriesPoint { year, x, y, rank }
            })
            .collect()
    }

    /// Clears `sink` and draws the borders, year gridlines and year labels.
    pub fn draw_grid<K: DrawingSink + ?Sized>(&self, sink: &mut K) -> ChartResult<()> {
        let geometry = self.config.geometry;
        let margin = geometry.margin;
        let right = geometry.plot_right();
        let bottom = geometry.plot_bottom();
        let width = self.config.grid_line_width;
        let color = self.config.grid_color;

        sink.clear()?;
        sink.draw_line(&LinePrimitive::new(margin, margin, right, margin, width, color))?;
        sink.draw_line(&LinePrimitive::new(margin, bottom, right, bottom, width, color))?;
        sink.draw_line(&LinePrimitive::new(
            margin,
            0.0,
            margin,
            geometry.height,
            width,
            color,
        ))?;

        for (index, year) in self.config.years.iter().enumerate() {
            let x = self.mapper.x_for_year_index(geometry.width, index);
            sink.draw_line(&LinePrimitive::new(x, 0.0, x, geometry.height, width, color))?;
            sink.draw_text(&TextPrimitive::new(
                year.to_string(),
                x + self.config.text_dx,
                bottom,
                self.config.label_font_size_px,
                color,
                TextAnchor::NorthWest,
            ))?;
        }

        trace!(years = self.config.years.len(), "drew grid");
        Ok(())
    }

    /// Full redraw: grid first, then one polyline per selected name.
    ///
    /// Colors follow the position in `selected`. Every point gets a
    /// `"<name> <rank>"` label; unranked years show the placeholder glyph.
    /// Unknown names fail the call before the sink is touched.
    pub fn draw_series<K, S>(
        &self,
        sink: &mut K,
        lookup: &NameLookup,
        selected: &[S],
    ) -> ChartResult<()>
    where
        K: DrawingSink + ?Sized,
        S: AsRef<str>,
    {
        let resolved = resolve_selection(lookup, selected)?;

        self.draw_grid(sink)?;

        for (slot, (name, series)) in resolved.iter().enumerate() {
            let color = self.series_color(slot);
            let points = self.project_series(series);

            for pair in points.windows(2) {
                let (start, end) = (pair[0], pair[1]);
                sink.draw_line(&LinePrimitive::new(
                    start.x,
                    start.y,
                    end.x,
                    end.y,
                    self.config.line_width,
                    color,
                ))?;
                sink.draw_text(&self.point_label(name, start, color))?;
            }
            if let Some(last) = points.last() {
                sink.draw_text(&self.point_label(name, *last, color))?;
            }

            trace!(
                name = %name,
                slot,
                ranked = points.iter().filter(|point| point.rank.is_ranked()).count(),
                "drew name series"
            );
        }

        debug!(selected = resolved.len(), "redrew name trends");
        Ok(())
    }

    /// Grid-only frame, as drawn at startup.
    pub fn build_grid_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.geometry);
        self.draw_grid(&mut frame)?;
        Ok(frame)
    }

    /// Frame for `selected` without touching any live sink.
    pub fn build_series_frame<S: AsRef<str>>(
        &self,
        lookup: &NameLookup,
        selected: &[S],
    ) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.geometry);
        self.draw_series(&mut frame, lookup, selected)?;
        Ok(frame)
    }

    fn point_label(&self, name: &str, point: SeriesPoint, color: Color) -> TextPrimitive {
        TextPrimitive::new(
            format!("{name} {}", point.rank.label(&self.config.unranked_glyph)),
            point.x + self.config.text_dx,
            point.y,
            self.config.label_font_size_px,
            color,
            TextAnchor::NorthWest,
        )
    }
}

fn resolve_selection<'a, S: AsRef<str>>(
    lookup: &'a NameLookup,
    selected: &'a [S],
) -> ChartResult<Vec<(&'a str, &'a NameSeries)>> {
    selected
        .iter()
        .map(|name| {
            let name = name.as_ref();
            lookup
                .get(name)
                .map(|series| (name, series))
                .ok_or_else(|| ChartError::UnknownName(name.to_owned()))
        })
        .collect()
}

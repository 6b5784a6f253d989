#![cfg(feature = "cairo-backend")]

use std::path::PathBuf;

use name_trends::ChartError;
use name_trends::core::{NameLookup, NameSeries};
use name_trends::render::{CairoSink, Color, DrawingSink};
use name_trends::{TrendChart, TrendChartConfig};

#[test]
fn cairo_sink_rejects_invalid_surface_size() {
    let err = CairoSink::new(0, 480).err().expect("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_sink_draws_grid_and_series() {
    let chart = TrendChart::new(TrendChartConfig::default()).expect("chart");
    let mut lookup = NameLookup::new();
    lookup.insert("Opal".to_owned(), NameSeries::from_pairs([(1900, 30), (1960, 700)]));

    let mut sink = CairoSink::new(1000, 600).expect("sink");
    chart.draw_series(&mut sink, &lookup, &["Opal"]).expect("draw");

    let stats = sink.stats();
    assert_eq!(stats.lines_drawn, 15 + 11);
    assert_eq!(stats.texts_drawn, 12 + 12);
}

#[test]
fn cairo_sink_writes_png() {
    let chart = TrendChart::new(TrendChartConfig::default()).expect("chart");
    let mut sink = CairoSink::new(1000, 600).expect("sink");
    sink.set_clear_color(Color::WHITE).expect("clear color");
    chart.draw_grid(&mut sink).expect("grid");

    let out = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("grid.png");
    sink.write_png(&out).expect("png");

    let bytes = std::fs::read(&out).expect("read png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn cairo_sink_clear_replaces_pixels_with_transparent_color() {
    let chart = TrendChart::new(TrendChartConfig::default()).expect("chart");
    let mut lookup = NameLookup::new();
    lookup.insert("Opal".to_owned(), NameSeries::from_pairs([(1900, 30), (1960, 700)]));

    let mut sink = CairoSink::new(200, 120).expect("sink");
    sink.set_clear_color(Color::WHITE).expect("clear color");
    chart.draw_series(&mut sink, &lookup, &["Opal"]).expect("draw");

    sink.set_clear_color(Color::rgba(0.0, 0.0, 0.0, 0.0)).expect("transparent");
    sink.clear().expect("clear");
    sink.surface().flush();

    sink.surface()
        .with_data(|data| assert!(data.iter().all(|byte| *byte == 0), "surface should be fully transparent"))
        .expect("surface data");
    assert_eq!(sink.stats().lines_drawn, 0);
}

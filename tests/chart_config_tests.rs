use name_trends::core::{CanvasGeometry, DEFAULT_MAX_RANK, Palette, YearAxis};
use name_trends::render::Color;
use name_trends::{ChartError, TrendChartConfig};

#[test]
fn defaults_match_the_decade_chart() {
    let config = TrendChartConfig::default();

    assert_eq!(config.geometry, CanvasGeometry::new(1000.0, 600.0, 20.0));
    assert_eq!(config.years.len(), 12);
    assert_eq!(config.years.get(0), Some(1900));
    assert_eq!(config.palette.colors(), &[Color::RED, Color::PURPLE, Color::GREEN, Color::BLUE]);
    assert_eq!(config.text_dx, 2.0);
    assert_eq!(config.line_width, 1.0);
    assert_eq!(config.grid_line_width, 1.0);
    assert_eq!(config.max_rank, DEFAULT_MAX_RANK);
    assert_eq!(config.unranked_glyph, "*");
    config.validate().expect("defaults are valid");
}

#[test]
fn json_round_trip_preserves_config() {
    let config = TrendChartConfig::new(
        CanvasGeometry::new(800.0, 400.0, 10.0),
        YearAxis::new(vec![1950, 1975, 2000]).expect("axis"),
    )
    .with_palette(Palette::new(vec![Color::BLUE]).expect("palette"))
    .with_unranked_glyph("-");

    let json = config.to_json_pretty().expect("serialize");
    let parsed = TrendChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = TrendChartConfig::from_json_str(
        r#"{ "years": [2000, 2005, 2010], "text_dx": 4.0 }"#,
    )
    .expect("parse");

    assert_eq!(parsed.years.years(), &[2000, 2005, 2010]);
    assert_eq!(parsed.text_dx, 4.0);
    assert_eq!(parsed.geometry, CanvasGeometry::default());
    assert_eq!(parsed.palette, Palette::default());
}

#[test]
fn json_rejects_invalid_year_axis_and_empty_palette() {
    let err = TrendChartConfig::from_json_str(r#"{ "years": [2000, 1990] }"#)
        .expect_err("unordered years must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = TrendChartConfig::from_json_str(r#"{ "palette": [] }"#)
        .expect_err("empty palette must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn validate_rejects_bad_styles() {
    assert!(TrendChartConfig::default().with_max_rank(0).validate().is_err());
    assert!(TrendChartConfig::default().with_unranked_glyph("").validate().is_err());
    assert!(TrendChartConfig::default().with_label_font_size(-1.0).validate().is_err());
    assert!(TrendChartConfig::default().with_text_dx(f64::INFINITY).validate().is_err());
    assert!(
        TrendChartConfig::default()
            .with_grid_style(Color::rgba(0.0, 0.0, 0.0, 2.0), 1.0)
            .validate()
            .is_err()
    );
}

#[test]
fn hex_colors_parse_into_normalized_channels() {
    assert_eq!(Color::from_hex("#ff0000").expect("red"), Color::RED);
    let translucent = Color::from_hex("0000ff80").expect("blue");
    assert_eq!(translucent.blue, 1.0);
    assert!((translucent.alpha - 128.0 / 255.0).abs() < 1e-12);
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#zzzzzz").is_err());
}

#[test]
fn hex_colors_reject_signed_channels() {
    assert!(Color::from_hex("#+f+f+f").is_err());
    assert!(Color::from_hex("+f+f+f+f").is_err());
    assert!(Color::from_hex("#ff-0ff").is_err());
}

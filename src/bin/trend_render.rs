use std::fs;
use std::path::{Path, PathBuf};

use name_trends::api::{TrendChart, TrendChartConfig};
use name_trends::data::{parse_selection, read_files, search_names};
use name_trends::render::RecordingSink;

const USAGE: &str = "usage: trend_render --data <file> [--data <file>...] [--names \"<query>\"] \
[--search <target>] [--config <json>] [--output <frame.json>] [--png <file.png>]";

#[derive(Debug, Default)]
struct CliArgs {
    data: Vec<PathBuf>,
    names: Option<String>,
    search: Option<String>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    png: Option<PathBuf>,
}

fn main() {
    let _ = name_trends::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            TrendChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => TrendChartConfig::default(),
    };
    let chart = TrendChart::new(config).map_err(|err| err.to_string())?;
    let lookup = read_files(&args.data).map_err(|err| err.to_string())?;
    println!("loaded {} names from {} files", lookup.len(), args.data.len());

    if let Some(target) = &args.search {
        let matches = search_names(&lookup, target);
        println!("{} match `{target}`: {}", matches.len(), matches.join(" "));
    }

    let selection = args
        .names
        .as_deref()
        .map(|query| parse_selection(&lookup, query))
        .unwrap_or_default();

    let mut sink = RecordingSink::new(chart.config().geometry);
    chart
        .draw_series(&mut sink, &lookup, &selection)
        .map_err(|err| err.to_string())?;
    println!(
        "drew {} names: {} lines, {} labels",
        selection.len(),
        sink.last_line_count,
        sink.last_text_count
    );

    if let Some(output) = &args.output {
        let json = sink.frame().to_json_pretty().map_err(|err| err.to_string())?;
        write_text(output, &json)?;
        println!("wrote {}", output.display());
    }

    if let Some(png) = &args.png {
        write_png(&chart, sink.frame(), png)?;
    }

    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn write_png(
    chart: &TrendChart,
    frame: &name_trends::render::RenderFrame,
    path: &Path,
) -> Result<(), String> {
    use name_trends::render::CairoSink;

    let geometry = chart.config().geometry;
    let mut cairo = CairoSink::new(geometry.width.round() as i32, geometry.height.round() as i32)
        .map_err(|err| err.to_string())?;
    frame.replay(&mut cairo).map_err(|err| err.to_string())?;
    cairo.write_png(path).map_err(|err| err.to_string())?;
    println!("wrote {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(
    _chart: &TrendChart,
    _frame: &name_trends::render::RenderFrame,
    _path: &Path,
) -> Result<(), String> {
    Err("--png requires feature `cairo-backend`".to_owned())
}

fn write_text(path: &Path, contents: &str) -> Result<(), String> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create `{}`: {err}", parent.display()))?;
    }
    fs::write(path, contents).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {name}"))
        };
        match flag.as_str() {
            "--data" => parsed.data.push(PathBuf::from(value("--data")?)),
            "--names" => parsed.names = Some(value("--names")?),
            "--search" => parsed.search = Some(value("--search")?),
            "--config" => parsed.config = Some(PathBuf::from(value("--config")?)),
            "--output" => parsed.output = Some(PathBuf::from(value("--output")?)),
            "--png" => parsed.png = Some(PathBuf::from(value("--png")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    if parsed.data.is_empty() {
        return Err(format!("missing --data\n{USAGE}"));
    }
    Ok(parsed)
}

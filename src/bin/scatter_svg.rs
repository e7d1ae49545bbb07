//! scatter_svg - render the scatter chart to SVG after a sequence of clicks.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use scatter_rs::ScatterChart;
use scatter_rs::api::ChartConfig;
use scatter_rs::render::SvgRenderer;
use scatter_rs::telemetry::init_default_tracing;

#[derive(Parser, Debug)]
#[command(name = "scatter_svg")]
#[command(about = "Render the indicator scatter chart as SVG", long_about = None)]
struct Args {
    /// CSV dataset with state, abbr and the six indicator columns
    data: PathBuf,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// JSON chart configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Label control value to click, in order (e.g. `age`, `smokes`)
    #[arg(long = "click")]
    clicks: Vec<String>,

    /// Milliseconds between consecutive clicks
    #[arg(long, default_value_t = 0.0)]
    click_interval_ms: f64,

    /// Sample the scene at this time; defaults to after every transition settles
    #[arg(long)]
    time_ms: Option<f64>,

    /// Show the tooltip for the record with this abbreviation
    #[arg(long)]
    hover: Option<String>,

    /// Print the JSON snapshot instead of SVG markup
    #[arg(long)]
    snapshot: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _ = init_default_tracing();

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read `{}`", path.display()))?;
            ChartConfig::from_json_str(&raw)?
        }
        None => ChartConfig::default(),
    };

    let Some(mut chart) = ScatterChart::startup(SvgRenderer::new(), &args.data, config) else {
        bail!("chart failed to initialize from `{}`", args.data.display());
    };

    let mut clock_ms = 0.0;
    for (index, value) in args.clicks.iter().enumerate() {
        clock_ms = index as f64 * args.click_interval_ms;
        chart.click_label(value, clock_ms)?;
    }
    let now_ms = args
        .time_ms
        .unwrap_or(clock_ms + chart.config().transition_duration_ms);

    if let Some(abbr) = &args.hover {
        let index = chart
            .dataset()
            .records()
            .iter()
            .position(|record| &record.abbr == abbr)
            .with_context(|| format!("no record with abbreviation `{abbr}`"))?;
        let (x, y) = chart
            .marker_position(index, now_ms)
            .with_context(|| format!("no marker for `{abbr}`"))?;
        let (x, y) = chart.config().plot_area().to_canvas(x, y);
        chart.hover_enter(index, x, y)?;
    }

    let output = if args.snapshot {
        chart.snapshot(now_ms).to_json_contract_v1_pretty()?
    } else {
        chart.render(now_ms)?;
        chart.into_renderer().into_document()
    };

    match &args.out {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write `{}`", path.display()))?,
        None => print!("{output}"),
    }
    Ok(())
}

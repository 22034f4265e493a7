use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use audit_visuals::{
    ChartError, ChartKind, ChartRenderer, ChartResult, RenderConfig, RenderedChart,
};
use clap::Parser;
use clap::error::ErrorKind;

#[derive(Debug, Parser)]
#[command(name = "audit_visuals")]
#[command(version, about = "Render a branded audit chart from a JSON payload")]
#[command(long_about = "Render a branded audit chart from a JSON payload.\n\n\
    Chart kinds:\n  \
    score_gauge, metric_card, comparison_chart, ranking_comparison,\n  \
    heat_map, funnel_chart, revenue_opportunity\n\n\
    The output format follows the file extension (.png or .svg).")]
struct Cli {
    /// Chart kind to render
    chart_kind: String,

    /// JSON object with the chart data
    json_payload: String,

    /// Destination image path
    output_path: PathBuf,

    /// Theme/scale configuration file (JSON)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pixel density multiplier (overrides config)
    #[arg(long, value_name = "FACTOR")]
    scale: Option<f64>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let _ = audit_visuals::telemetry::init_default_tracing();

    match run(&cli) {
        Ok(rendered) => {
            println!("Generated: {}", rendered.path.display());
            ExitCode::SUCCESS
        }
        Err(err @ ChartError::UnknownChartKind(_)) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> ChartResult<RenderedChart> {
    let kind = ChartKind::from_str(&cli.chart_kind)?;

    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(scale) = cli.scale {
        config = config.with_scale(scale);
    }

    let renderer = ChartRenderer::new(config)?;
    renderer.render_json_to_path(kind, &cli.json_payload, &cli.output_path)
}

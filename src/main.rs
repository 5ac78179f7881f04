use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use switchplot::{AttributeKey, Dataset, ScatterChart, ScatterConfig, SelectionController};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive scatter plot with switchable axes")]
struct Args {
    /// CSV file with columns state, abbr, poverty, age, income, healthcare, obesity, smokes
    data: PathBuf,

    /// Configuration file (.yaml, .yml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial X attribute (poverty, age, income)
    #[arg(long)]
    x: Option<AttributeKey>,

    /// Initial Y attribute (healthcare, smokes, obesity)
    #[arg(long)]
    y: Option<AttributeKey>,

    /// Write the initial chart as SVG and exit without opening a window
    #[arg(long)]
    export_svg: Option<PathBuf>,

    /// Write the initial chart as PNG and exit without opening a window
    #[arg(long)]
    export_png: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = match &args.config {
        Some(path) => ScatterConfig::load_from_path(path)?,
        None => ScatterConfig::default(),
    };
    if args.x.is_some() {
        cfg.initial_x = args.x;
    }
    if args.y.is_some() {
        cfg.initial_y = args.y;
    }
    cfg.validate()?;

    let dataset = Dataset::from_csv_path(&args.data)?;
    let chart = ScatterChart::new(dataset, cfg)?;

    if args.export_svg.is_some() || args.export_png.is_some() {
        if let Some(path) = &args.export_svg {
            chart.export_svg(path)?;
        }
        if let Some(path) = &args.export_png {
            chart.export_png(path)?;
        }
        return Ok(());
    }

    let ctrl = SelectionController::new();
    let events = ctrl.subscribe();
    std::thread::spawn(move || {
        for ev in events {
            tracing::info!(
                role = %ev.role,
                from = %ev.previous,
                to = %ev.current,
                domain = ?ev.domain,
                "selection changed"
            );
        }
    });

    switchplot::run_scatter(chart, Some(ctrl))?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

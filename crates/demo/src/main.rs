// File: crates/demo/src/main.rs
// Summary: Loads publication data (YAML series / CSV events) and renders the chronology chart to PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use chronology_core::{build_chart, load_dir, load_file, ChartConfig, Palette, Publication, RenderOptions};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "chronology", about = "When stories were released vs. when they are set")]
struct Args {
    /// Data files or directories (.yaml/.yml series, .csv events).
    #[arg(default_value = "data")]
    inputs: Vec<PathBuf>,

    /// YAML figure configuration; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(short, long, default_value = "target/out/chronology.png")]
    output: PathBuf,

    /// Theme preset, overriding the configuration.
    #[arg(long)]
    theme: Option<String>,

    /// Year treated as "now", overriding the configuration.
    #[arg(long)]
    now: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chronology=info,chronology_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => ChartConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(theme) = args.theme {
        cfg.theme = theme;
    }
    if args.now.is_some() {
        cfg.now = args.now;
    }

    let publications = load_inputs(&args.inputs)?;
    if publications.is_empty() {
        anyhow::bail!("no publications loaded; check the input paths");
    }

    let chart = build_chart(&cfg, &publications, &mut Palette::tab10())?;

    let opts = RenderOptions {
        width: cfg.width,
        height: cfg.height,
        theme: chronology_core::theme::find(&cfg.theme),
        ..RenderOptions::default()
    };
    chart.render_to_png(&opts, &args.output)?;
    info!(output = %args.output.display(), "wrote chart");
    Ok(())
}

fn load_inputs(inputs: &[PathBuf]) -> Result<Vec<Publication>> {
    let mut out = Vec::new();
    for p in inputs {
        out.extend(load_input(p).with_context(|| format!("failed to load '{}'", p.display()))?);
    }
    Ok(out)
}

fn load_input(p: &Path) -> Result<Vec<Publication>> {
    if p.is_dir() {
        Ok(load_dir(p)?)
    } else {
        Ok(load_file(p)?)
    }
}

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cg3_core::ColorSet;
use cg3conv::error::ConvertError;
use cg3conv::models::ConvertConfig;
use cg3conv::services::{ConvertRequest, Converter};

#[derive(Parser)]
#[command(name = "cg3conv")]
#[command(about = "Convert a truecolor PNG to a 256x192 MC6847 CG3 bitmap")]
#[command(version)]
struct Cli {
    /// Source PNG image (any size)
    source: PathBuf,

    /// Packed bitmap destination (extension forced to .cg3)
    #[arg(short, long)]
    output: PathBuf,

    /// Write the log-magnitude spectrum of the source as PNG
    #[arg(long, value_name = "PNG")]
    magnitude: Option<PathBuf>,

    /// Write the 256x192 reconstruction before quantization as PNG
    #[arg(long, value_name = "PNG")]
    scaled: Option<PathBuf>,

    /// Write a 256x192 rendering of the packed bitmap as PNG
    #[arg(long, value_name = "PNG")]
    preview: Option<PathBuf>,

    /// Color set: "standard" (green, yellow, blue, red) or "alternate"
    /// (buff, cyan, magenta, orange)
    #[arg(long)]
    color_set: Option<ColorSet>,

    /// Block uses per unit of usage penalty
    #[arg(long, value_name = "N")]
    bias_step: Option<u32>,

    /// YAML configuration file
    #[arg(long, env = "CG3CONV_CONFIG", value_name = "YAML")]
    config: Option<PathBuf>,

    /// Log every pipeline stage
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "cg3conv=debug,cg3_core=debug"
    } else {
        "cg3conv=info,cg3_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().compact().without_time())
        .init();

    let config = load_config(&cli)?;
    let request = ConvertRequest {
        source: cli.source,
        output: cli.output,
        magnitude: cli.magnitude,
        scaled: cli.scaled,
        preview: cli.preview,
    };

    let converter = Converter::new(&config).map_err(with_stage)?;
    let outcome = converter
        .run(&request)
        .map_err(with_stage)
        .with_context(|| format!("Failed to convert {}", request.source.display()))?;

    let stats = outcome.conversion.stats();
    tracing::info!(
        path = %outcome.packed_path.display(),
        diagnostics = outcome.diagnostics.len(),
        min_difficulty = stats.min_difficulty,
        max_difficulty = stats.max_difficulty,
        "Conversion complete"
    );
    Ok(())
}

/// Config file (if any) with CLI flags applied on top.
fn load_config(cli: &Cli) -> anyhow::Result<ConvertConfig> {
    let mut config = match &cli.config {
        Some(path) => ConvertConfig::load(path)
            .map_err(|e| with_stage(e.into()))
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ConvertConfig::default(),
    };

    if let Some(color_set) = cli.color_set {
        config.color_set = color_set;
        // An explicit color set on the command line beats custom colors
        config.colors = None;
    }
    if let Some(step) = cli.bias_step {
        config.bias_step = step;
    }
    Ok(config)
}

/// Prefix the failing stage so the exit message names it.
fn with_stage(e: ConvertError) -> anyhow::Error {
    let stage = e.stage();
    anyhow::Error::new(e).context(format!("{stage} stage failed"))
}

//! Tick Power Table Generator
//!
//! Derives the per-bit constants of the 1.0001 tick ladder at high precision,
//! validates them through logarithms and emits diagnostic rows, a JSON
//! artifact or the frozen Rust module.

mod config;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::{GenConfig, OutputFormat};
use tick_power_core::{Sign, WidthPolicy};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tick-power-gen")]
#[command(about = "Generate and validate fixed-point 1.0001^tick power tables")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "tick-power-gen.toml")]
    config: PathBuf,

    /// Word width: half (128-bit) or full (256-bit)
    #[arg(short, long)]
    width: Option<WidthPolicy>,

    /// Sign to generate; repeat for both
    #[arg(short, long)]
    sign: Vec<Sign>,

    /// First bit index to generate
    #[arg(long)]
    first_bit: Option<u8>,

    /// Last bit index to generate
    #[arg(long)]
    last_bit: Option<u8>,

    /// Fractional bits of the derivation engine
    #[arg(long)]
    precision_bits: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the log2 validator
    #[arg(long)]
    no_validate: bool,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_missing = !cli.config.exists();
    let mut config = if config_missing {
        GenConfig::default()
    } else {
        GenConfig::from_file(&cli.config)?
    };
    apply_overrides(&mut config, cli);

    // Initialize logging
    init_logging(&config)?;
    if config_missing {
        warn!("Config file not found, using defaults");
    }

    config.validate()?;
    info!(
        width = %config.generation.width,
        precision_bits = config.generation.precision_bits,
        format = ?config.output.format,
        "Starting tick power generation"
    );

    let rendered = output::render(&config)?;
    match &config.output.path {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn apply_overrides(config: &mut GenConfig, cli: Cli) {
    let generation = &mut config.generation;
    if let Some(width) = cli.width {
        generation.width = width;
    }
    if !cli.sign.is_empty() {
        generation.signs = cli.sign;
    }
    if let Some(first_bit) = cli.first_bit {
        generation.first_bit = first_bit;
    }
    if let Some(last_bit) = cli.last_bit {
        generation.last_bit = last_bit;
    }
    if let Some(precision_bits) = cli.precision_bits {
        generation.precision_bits = precision_bits;
    }
    if cli.no_validate {
        generation.validate = false;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(path) = cli.output {
        config.output.path = Some(path);
    }
    if let Some(log_level) = cli.log_level {
        config.logging.level = log_level;
    }
}

fn init_logging(config: &GenConfig) -> Result<()> {
    let log_level = config
        .logging
        .level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    // logs go to stderr so stdout stays clean for the table
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("tick_power_gen={log_level},tick_power_core={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

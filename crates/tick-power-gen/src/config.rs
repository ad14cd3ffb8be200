//! Generator configuration loaded from TOML

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tick_power_core::{BitRange, GeneratorConfig, Precision, Sign, WidthPolicy, BIT_COUNT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    pub generation: GenerationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: WidthPolicy,
    pub signs: Vec<Sign>,
    pub first_bit: u8,
    pub last_bit: u8,
    /// Fractional bits of the high-precision engine
    pub precision_bits: u32,
    /// Run the log2 validator before emitting anything
    pub validate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Diagnostic rows grouped by sign
    Text,
    /// Serialized table artifact
    Json,
    /// Rust module with the frozen tables for both widths
    Rust,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Write here instead of stdout
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: WidthPolicy::Full,
            signs: Sign::ALL.to_vec(),
            first_bit: 0,
            last_bit: (BIT_COUNT - 1) as u8,
            precision_bits: Precision::DEFAULT_BITS,
            validate: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            path: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl GenConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GenConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let generation = &self.generation;
        if generation.signs.is_empty() {
            bail!("generation.signs must name at least one sign");
        }
        BitRange::new(generation.first_bit, generation.last_bit)
            .context("generation.first_bit/last_bit")?;
        if generation.precision_bits == 0 {
            bail!("generation.precision_bits must be greater than 0");
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            bail!("logging.level '{}' is not a log level", self.logging.level);
        }
        Ok(())
    }

    pub fn generator_config(&self) -> Result<GeneratorConfig> {
        let generation = &self.generation;
        let mut signs = generation.signs.clone();
        signs.sort();
        signs.dedup();
        Ok(GeneratorConfig {
            width: generation.width,
            signs,
            bits: BitRange::new(generation.first_bit, generation.last_bit)?,
            precision: Precision::new(generation.precision_bits),
        })
    }
}

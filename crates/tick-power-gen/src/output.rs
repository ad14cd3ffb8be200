//! Generation, validation and rendering of the requested output

use anyhow::{Context, Result};
use tick_power_core::table::format::{diagnostic_rows, render_diagnostics, render_rust_module};
use tick_power_core::table::{log_base_of_two, max_price_magnitude};
use tick_power_core::{
    BitRange, ConstantTableGenerator, PowerConstant, PowerTable, Precision, Sign,
    ValidationReport, Validator, WidthPolicy, LOG_BASE_TWO_SHIFT,
};
use tracing::{info, warn};

use crate::config::{GenConfig, OutputFormat};

/// Generate the configured entries and render them
pub fn render(config: &GenConfig) -> Result<String> {
    match config.output.format {
        OutputFormat::Text => render_text(config),
        OutputFormat::Json => render_json(config),
        OutputFormat::Rust => render_rust(config),
    }
}

fn validate(
    config: &GenConfig,
    width: WidthPolicy,
    entries: &[PowerConstant],
) -> Result<Option<ValidationReport>> {
    if !config.generation.validate {
        warn!("Validation disabled; output must not be frozen");
        return Ok(None);
    }
    let precision = Precision::new(config.generation.precision_bits);
    let report = Validator::new(width, precision)?
        .check(entries)
        .context("Generated table failed validation")?;
    Ok(Some(report))
}

fn render_text(config: &GenConfig) -> Result<String> {
    let generator_config = config.generator_config()?;
    let entries = generator_config.generate()?;
    info!("Generated {} entries", entries.len());
    let report = validate(config, generator_config.width, &entries)?;

    let precision = generator_config.precision;
    let rows = diagnostic_rows(&entries, report.as_ref(), precision)?;
    let mut out = render_diagnostics(&rows);

    let magnitude = max_price_magnitude(precision)?;
    let log_two = log_base_of_two(LOG_BASE_TWO_SHIFT, precision)?;
    out.push_str(&format!(
        "\n# max price 1.0001^(2^20) ~ 2^{} ~ 10^{}\n# log_1.0001(2) * 2^{} = 0x{:x}\n",
        magnitude.log2.to_rounded_decimal_string(4),
        magnitude.log10.to_rounded_decimal_string(4),
        LOG_BASE_TWO_SHIFT,
        log_two
    ));
    Ok(out)
}

fn build_table(config: &GenConfig, width: WidthPolicy) -> Result<PowerTable> {
    let precision = Precision::new(config.generation.precision_bits);
    let generator = ConstantTableGenerator::new(width, precision)?;
    if !config.generation.validate {
        warn!("Validation disabled; output must not be frozen");
        let entries = generator.generate_range(&Sign::ALL, BitRange::full())?;
        return Ok(PowerTable::from_entries(width, &entries)?);
    }
    let validator = Validator::new(width, precision)?;
    let (table, _) = generator
        .build_table(&validator)
        .with_context(|| format!("Failed to build the {width} table"))?;
    Ok(table)
}

fn render_json(config: &GenConfig) -> Result<String> {
    let generator_config = config.generator_config()?;
    let entries = generator_config.generate()?;
    validate(config, generator_config.width, &entries)?;

    let table = PowerTable::from_entries(generator_config.width, &entries)
        .context("JSON output needs every sign and bit")?;
    let mut json = serde_json::to_string_pretty(&table.to_artifact())?;
    json.push('\n');
    Ok(json)
}

fn render_rust(config: &GenConfig) -> Result<String> {
    info!("Rendering frozen tables for both widths");
    let full = build_table(config, WidthPolicy::Full)?;
    let half = build_table(config, WidthPolicy::Half)?;
    Ok(render_rust_module(&[&full, &half]))
}

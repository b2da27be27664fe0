use crate::config::{toml_config::TomlConfig, CliConfig, DimensionSource};
use crate::core::batch::{format_area, read_dimensions_file, write_records};
use crate::core::calculator::AreaCalculator;
use crate::core::{AreaRecord, ConfigProvider, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;

/// Runs one invocation: merges the config file, computes, and writes results
/// to `--output` when given, otherwise to `out`.
pub fn run<W: Write>(mut config: CliConfig, out: &mut W) -> Result<()> {
    if let Some(path) = config.config.clone() {
        tracing::info!("Loading configuration from: {}", path);
        let file_config = TomlConfig::from_file(&path)?;
        file_config.validate()?;
        config.apply_file_defaults(&file_config);
    }

    config.validate()?;
    tracing::debug!("CLI config: {:?}", config);

    let calculator = AreaCalculator::new(config.validation_mode());
    let source = config.dimension_source()?;

    let records = match &source {
        DimensionSource::Inline(dims) => vec![AreaRecord::new(dims, calculator.compute(dims)?)],
        DimensionSource::File(path) => calculator.compute_all(&read_dimensions_file(path)?)?,
    };

    match &config.output {
        Some(path) => {
            let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
            write_output(&mut file, &source, &records, &config)?;
            tracing::info!("Wrote {} records to {}", records.len(), path);
        }
        None => write_output(out, &source, &records, &config)?,
    }

    Ok(())
}

fn write_output<W: Write>(
    out: &mut W,
    source: &DimensionSource,
    records: &[AreaRecord],
    config: &CliConfig,
) -> Result<()> {
    // a single inline rectangle prints just its area
    if matches!(source, DimensionSource::Inline(_)) && config.output_format() == OutputFormat::Text {
        writeln!(out, "{}", format_area(records[0].area, config.precision()))?;
        out.flush()?;
        return Ok(());
    }

    write_records(out, records, config.output_format(), config.precision())
}

use crate::core::{AreaRecord, OutputFormat, RectangleDimensions};
use crate::utils::error::{AreaError, Result};
use serde_json::Value;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("csv") => Ok(InputFormat::Csv),
            _ => Err(AreaError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Reads dimensions from JSON (an object or an array of objects) or from CSV
/// with `width` and `height` columns. Other CSV columns are ignored.
pub fn read_dimensions<R: Read>(reader: R, format: InputFormat) -> Result<Vec<RectangleDimensions>> {
    let dimensions = match format {
        // parsed as a Value first so field errors like "missing field" survive
        InputFormat::Json => match serde_json::from_reader::<_, Value>(reader)? {
            value @ Value::Array(_) => serde_json::from_value(value)?,
            value => vec![serde_json::from_value(value)?],
        },
        InputFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader);
            csv_reader
                .deserialize()
                .collect::<std::result::Result<Vec<RectangleDimensions>, _>>()?
        }
    };

    tracing::debug!("Read {} dimension records ({:?})", dimensions.len(), format);
    Ok(dimensions)
}

pub fn read_dimensions_file<P: AsRef<Path>>(path: P) -> Result<Vec<RectangleDimensions>> {
    let format = InputFormat::from_path(&path)?;
    let file = std::fs::File::open(&path)?;
    read_dimensions(std::io::BufReader::new(file), format)
}

/// Above 2^52 every f64 is an integer, so rounding would be a no-op.
const MAX_FRACTIONAL: f64 = 4_503_599_627_370_496.0;

/// Rounds to `precision` decimal places; `None` keeps the value as is.
/// Values whose scaled form has no fractional digits left (including
/// overflow to infinity) and non-finite values are returned unchanged.
pub fn round_area(area: f64, precision: Option<usize>) -> f64 {
    let Some(digits) = precision else {
        return area;
    };

    let factor = 10f64.powi(digits as i32);
    let scaled = area * factor;
    if scaled.is_nan() || scaled.abs() >= MAX_FRACTIONAL {
        return area;
    }
    scaled.round() / factor
}

/// JSON has no NaN or infinity; serde_json would write them as `null`.
fn ensure_json_representable(index: usize, record: &AreaRecord) -> Result<()> {
    for (field, value) in [
        ("width", record.width),
        ("height", record.height),
        ("area", record.area),
    ] {
        if !value.is_finite() {
            return Err(AreaError::NonFiniteOutput {
                field: field.to_string(),
                value,
            }
            .at_record(index));
        }
    }
    Ok(())
}

pub fn format_area(area: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", digits, area),
        None => area.to_string(),
    }
}

pub fn write_records<W: Write>(
    mut writer: W,
    records: &[AreaRecord],
    format: OutputFormat,
    precision: Option<usize>,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(
                    writer,
                    "{} x {} = {}",
                    record.width,
                    record.height,
                    format_area(record.area, precision)
                )?;
            }
        }
        OutputFormat::Json => {
            let rounded = records
                .iter()
                .enumerate()
                .map(|(index, r)| -> Result<AreaRecord> {
                    ensure_json_representable(index, r)?;
                    Ok(AreaRecord {
                        area: round_area(r.area, precision),
                        ..*r
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_writer_pretty(&mut writer, &rounded)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            // header written by hand so an empty batch still gets one
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut writer);
            csv_writer.write_record(["width", "height", "area"])?;
            for record in records {
                csv_writer.serialize(AreaRecord {
                    area: round_area(record.area, precision),
                    ..*record
                })?;
            }
            csv_writer.flush()?;
        }
    }

    writer.flush()?;
    Ok(())
}

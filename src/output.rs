use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::model::JoinedRecord;

/// Fixed header, written once before all data lines.
pub const HEADER: &str = "STATE;YEAR;MONTH;PRECIPITATION;DENGUE";

pub const OUTPUT_SEPARATOR: char = ';';

/// Decimal text form of an aggregate. Integral values keep a trailing `.0`
/// (the reconciled file has always rendered whole counts that way);
/// everything else renders shortest-roundtrip.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// One `;`-joined data line, fields in output column order.
pub fn format_line(record: &JoinedRecord) -> String {
    [
        record.uf.as_str(),
        record.year.as_str(),
        record.month.as_str(),
        record.rainfall.as_str(),
        record.dengue_cases.as_str(),
    ]
    .join(&OUTPUT_SEPARATOR.to_string())
}

/// Write header + data lines through a buffered writer, creating parent
/// directories as needed. Returns bytes written for the summary log.
pub fn write_output(path: &Path, lines: &[String]) -> Result<u64> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{HEADER}").context("writing header")?;
    for line in lines {
        writeln!(writer, "{line}").context("writing data line")?;
    }
    writer.flush().context("flushing output")?;

    let bytes = fs::metadata(path).context("getting output metadata")?.len();
    info!(path = %path.display(), lines = lines.len(), bytes, "wrote output");
    Ok(bytes)
}

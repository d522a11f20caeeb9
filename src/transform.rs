use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PipelineError;
use crate::model::{CaseRecord, RainRecord};

static HAS_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("static digit pattern"));

/// First two `-`-separated components of a date string, re-joined with `-`:
/// `"2020-03-15"` → `"2020-03"`. A date with fewer than two dash parts
/// yields whatever is available, joined.
pub fn month_key(date: &str) -> String {
    date.split('-').take(2).collect::<Vec<_>>().join("-")
}

/// `"<uf>-<yy_mm>"` — the composite (region, month) bucket key.
pub fn region_month_key(uf: &str, yy_mm: &str) -> String {
    format!("{uf}-{yy_mm}")
}

/// Populate the derived `yy_mm` field from `data_iniSE`.
pub fn derive_month(mut record: CaseRecord) -> CaseRecord {
    record.yy_mm = month_key(&record.data_ini_se);
    record
}

/// Pass-through pairing of a record with its state, upstream of the
/// group-by-state shuffle. Not a reduction.
pub fn state_key(record: CaseRecord) -> (String, CaseRecord) {
    (record.uf.clone(), record)
}

/// A raw case count "has cases" iff it contains a decimal digit anywhere;
/// digitless values count as 0.0. The digit test is on the raw text, not on
/// numeric validity, so a digit-bearing non-float like `"12a"` is a fault.
pub fn case_count(raw: &str) -> Result<f64, PipelineError> {
    if !HAS_DIGIT.is_match(raw) {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .map_err(|_| PipelineError::NonNumericValue {
            field: "casos",
            value: raw.to_string(),
        })
}

/// Parse a rainfall reading, clamping negatives (sensor sentinels) to 0.0.
pub fn clamp_rain(raw: &str) -> Result<f64, PipelineError> {
    let value: f64 = raw.parse().map_err(|_| PipelineError::NonNumericValue {
        field: "rain_mm",
        value: raw.to_string(),
    })?;
    Ok(if value < 0.0 { 0.0 } else { value })
}

/// Key + normalized value for one rainfall record:
/// `("UF-YYYY-MM", clamped mm)`.
pub fn rain_key_value(record: &RainRecord) -> Result<(String, f64), PipelineError> {
    let key = region_month_key(&record.uf, &month_key(&record.date));
    Ok((key, clamp_rain(&record.rain_mm)?))
}

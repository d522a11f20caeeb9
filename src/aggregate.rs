use crate::error::PipelineError;
use crate::model::CaseRecord;
use crate::transform::{case_count, region_month_key};

/// Fan one state's records out to `("UF-YYYY-MM", cases)` pairs, one per
/// record, ready for the final sum-by-key.
pub fn expand_case_group(
    uf: &str,
    records: &[CaseRecord],
) -> Result<Vec<(String, f64)>, PipelineError> {
    records
        .iter()
        .map(|record| {
            let key = region_month_key(uf, &record.yy_mm);
            Ok((key, case_count(&record.casos)?))
        })
        .collect()
}

/// Round to 1 decimal place, ties to even, on the true binary value.
/// Applied exactly once, after the full sum — never on partial sums.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

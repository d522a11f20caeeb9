use crate::error::PipelineError;
use crate::model::JoinedRecord;
use crate::output::format_float;

/// Explicit presence check for the inner-join filter: a key survives only
/// when both aggregated sides produced a value for it.
pub fn both_present(rainfall: &[f64], dengue: &[f64]) -> bool {
    !rainfall.is_empty() && !dengue.is_empty()
}

/// Split a surviving key back into `(uf, year, month)` and stringify the
/// aggregates. A key with other than exactly 3 dash-separated components
/// (e.g. a region code containing `-`) is refused rather than guessed at.
pub fn unpack(key: &str, rainfall: f64, dengue: f64) -> Result<JoinedRecord, PipelineError> {
    let parts: Vec<&str> = key.split('-').collect();
    let [uf, year, month]: [&str; 3] =
        parts
            .try_into()
            .map_err(|_| PipelineError::KeyShapeMismatch {
                key: key.to_string(),
            })?;
    Ok(JoinedRecord {
        uf: uf.to_string(),
        year: year.to_string(),
        month: month.to_string(),
        rainfall: format_float(rainfall),
        dengue_cases: format_float(dengue),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_check_requires_both_sides() {
        assert!(both_present(&[1.0], &[2.0]));
        assert!(!both_present(&[], &[2.0]));
        assert!(!both_present(&[1.0], &[]));
        assert!(!both_present(&[], &[]));
    }

    #[test]
    fn unpack_splits_key_and_stringifies() -> anyhow::Result<()> {
        let record = unpack("SP-2020-01", 12.3, 5.0)?;
        assert_eq!(record.uf, "SP");
        assert_eq!(record.year, "2020");
        assert_eq!(record.month, "01");
        assert_eq!(record.rainfall, "12.3");
        assert_eq!(record.dengue_cases, "5.0");
        Ok(())
    }

    #[test]
    fn odd_key_shapes_are_refused() {
        for key in ["SP-2020", "SP-2020-01-extra", "SP"] {
            let err = unpack(key, 1.0, 1.0).unwrap_err();
            assert!(matches!(err, PipelineError::KeyShapeMismatch { .. }), "{key}");
        }
    }
}

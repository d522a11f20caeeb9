use thiserror::Error;

/// Record-level faults. Any of these aborts the whole batch job — there is
/// no partial-success model for a one-shot join.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// Input line carries fewer fields than the schema binds.
    #[error("malformed input line: expected at least {expected} fields, got {actual}: {line:?}")]
    MalformedInputLine {
        expected: usize,
        actual: usize,
        line: String,
    },

    /// A value that passed the digit-presence test but is not a valid float,
    /// or a rainfall reading that does not parse at all.
    #[error("non-numeric value {value:?} in {field}")]
    NonNumericValue { field: &'static str, value: String },

    /// An aggregate key that does not split into exactly (uf, year, month).
    #[error("aggregate key {key:?} does not split into region-year-month")]
    KeyShapeMismatch { key: String },
}

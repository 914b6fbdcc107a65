use super::Kind;

/// Conditions the loader detects itself. CSV and database failures pass
/// through as their own error types.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum IngestError {
    #[error("column {0} not found in header")]
    MissingColumn(String),
    #[error("row {row}: {column} = {value:?} is not a timestamp")]
    Timestamp {
        row: u64,
        column: String,
        value: String,
    },
    #[error("row {row}: {column} = {value:?} does not fit {kind}")]
    Mismatch {
        row: u64,
        column: String,
        value: String,
        kind: Kind,
    },
}

use thiserror::Error;

/// Failure modes of the prediction pipeline.
///
/// Every variant is a deterministic function of the request input, so
/// nothing here is worth retrying. The messages are part of the wire
/// contract and must not be reworded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// Fewer than the minimum number of raw records were supplied.
    #[error("Need at least 10 transactions for predictions")]
    InsufficientData,

    /// Fewer than the minimum number of records survived per-record parsing.
    #[error("Need at least 10 valid transactions for predictions")]
    InsufficientValidData,

    /// Anything unexpected during computation, e.g. forecast dates running
    /// past the supported calendar range.
    #[error("Prediction failed: {0}")]
    Internal(String),
}

/// Why a single raw record was dropped during aggregation.
///
/// Recovered locally: the record is skipped with a warning and the batch
/// continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordParseError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing or non-string date field")]
    MissingDate,

    #[error("unparseable date '{0}'")]
    InvalidDate(String),

    #[error("unparseable amount")]
    InvalidAmount,
}

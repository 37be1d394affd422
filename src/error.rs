use thiserror::Error;

/// Convenience result type for nullity operations.
pub type NullityResult<T> = Result<T, NullityError>;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by nullity sort/filter/report operations.
///
/// Argument validation always happens before any work is done against the frame, so an
/// [`NullityError::InvalidArgument`] never leaves a partially transformed result behind.
#[derive(Debug, Error)]
pub enum NullityError {
    /// A caller-supplied argument is outside its allowed set or range.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A column index passed to a reprojection does not exist.
    #[error("column index {index} out of bounds (columns={columns})")]
    ColumnOutOfBounds { index: usize, columns: usize },

    /// A row index passed to a reordering does not exist.
    #[error("row index {index} out of bounds (rows={rows})")]
    RowOutOfBounds { index: usize, rows: usize },

    /// Error raised by the Polars engine; propagated unmodified.
    #[error("polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// The engine's worker pool could not be built.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Report/options (de)serialisation failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NullityError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Error type returned by ingestion functions.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input does not conform to the provided schema (missing required columns, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed into the required [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

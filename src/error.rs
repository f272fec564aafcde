//! Error types for kantor

use thiserror::Error;

/// Main error type for kantor operations
#[derive(Error, Debug)]
pub enum KantorError {
    /// Any transport, status or decode failure while talking to the remote
    /// source. Fatal to the whole run: partial results cannot be aligned.
    #[error("Failed to fetch data: {0}")]
    Fetch(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Input series disagree on length or date ordering; building a table
    /// from them would skew the positional alignment silently.
    #[error("Misaligned series: {0}")]
    MisalignedSeries(String),

    #[error("No rows to summarize for column: {0}")]
    EmptyColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for kantor operations
pub type Result<T> = std::result::Result<T, KantorError>;

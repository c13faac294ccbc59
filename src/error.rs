//! Error types for the FARM report library.
//!
//! Only structural failures surface here. A field that is unsupported, a page whose
//! identifier does not match, or an unknown encoding sub-code is handled locally by
//! omitting the value or rendering a placeholder.

use thiserror::Error;

/// Result type alias for FARM report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when decoding a FARM log or rendering its report.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input (telemetry buffer, file contents) is missing or empty
    #[error("Missing input: {0}")]
    NullInput(String),

    /// A requested drive interface is neither SATA nor SAS
    #[error("Unsupported device: {0}")]
    UnsupportedDevice(String),

    /// The report output buffer could not be allocated
    #[error("Could not allocate memory for the report")]
    AllocationFailure,

    /// No page of the log produced a report section
    #[error("No FARM data available")]
    NoDataAvailable,

    /// Invalid input outside the telemetry buffer itself (e.g. unknown output format name)
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Report serialization error (JSON or MessagePack)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error occurred while reading a log or writing a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Error::AllocationFailure
    }
}

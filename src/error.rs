//! Error types for the asset tracker

use thiserror::Error;

/// Main error type for the asset tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Field index out of range: {index} (expected 0..={max})")]
    OutOfRange { index: usize, max: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl TrackerError {
    /// Whether this error came from the environment (file system, sink)
    /// rather than from a programming mistake or bad input.
    pub fn is_io_failure(&self) -> bool {
        matches!(self, TrackerError::IoError(_) | TrackerError::CsvError(_))
    }
}

/// Result type alias for asset tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

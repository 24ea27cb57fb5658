//! Error types for logbridge

use thiserror::Error;

/// Result type alias for logger operations
pub type LoggerResult<T> = Result<T, LoggerError>;

/// Error type for logger construction and emission
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Logger was created without a usable name
    #[error("logger name must not be empty")]
    MissingName,

    /// Level input could not be turned into a threshold
    #[error("invalid log level {input:?}: {reason}")]
    InvalidLevel { input: String, reason: String },

    /// The sink failed while handling a record
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl LoggerError {
    /// Returns a stable numeric code for the error
    pub fn error_code(&self) -> u32 {
        match self {
            LoggerError::MissingName => 1,
            LoggerError::InvalidLevel { .. } => 2,
            LoggerError::Sink(_) => 3,
            LoggerError::Config(_) => 4,
        }
    }
}

impl From<serde_json::Error> for LoggerError {
    fn from(err: serde_json::Error) -> Self {
        LoggerError::Config(err.to_string())
    }
}

/// Error returned by a sink that could not take a record
#[derive(Error, Debug)]
pub enum SinkError {
    /// Writing the record failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be serialized
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The sink refused the record
    #[error("record rejected: {0}")]
    Rejected(String),
}

impl From<serde_json::Error> for SinkError {
    fn from(err: serde_json::Error) -> Self {
        SinkError::Serialization(err.to_string())
    }
}

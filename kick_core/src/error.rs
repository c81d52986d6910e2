//! Error types for the kick_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for kick_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Periodicity string that names none of the supported classes
    #[error("unknown periodicity '{0}' (expected daily, weekly, or monthly)")]
    UnknownPeriodicity(String),

    /// Habit store error
    #[error("Habit store error: {0}")]
    Store(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

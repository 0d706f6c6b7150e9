use std::io;

/// Errors that can occur during sheetcalc operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cannot evaluate {coefficient}x^{exponent} at x = {x}")]
    DomainError {
        coefficient: f64,
        exponent: f64,
        x: f64,
    },

    #[error("Invalid interval: start {start} must be less than end {end}")]
    InvalidInterval { start: f64, end: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input ended before all values were read")]
    UnexpectedEof,
}

/// Result type alias for sheetcalc operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the pitch-perfect crate

use thiserror::Error;

/// Main error type for the pitch-perfect crate
///
/// Only data-boundary failures surface here. The model's recoverable
/// conditions (a pitch without empirical support, an unrecognized
/// play-by-play outcome, an action outside the fixed enumeration) are
/// handled locally and never propagate as errors.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid count: {balls} balls, {strikes} strikes (must be 0-3 and 0-2)")]
    InvalidCount { balls: u8, strikes: u8 },

    #[error("state index {index} is out of bounds (must be 0-15)")]
    InvalidStateIndex { index: usize },

    #[error("invalid zone {zone} (must be 1-9 or 11-14)")]
    InvalidZone { zone: u8 },

    #[error("unknown pitch type code '{code}'")]
    UnknownPitchType { code: String },

    #[error("learning rate {value} must be finite and in [0, 1]")]
    InvalidLearningRate { value: f64 },

    #[error("outcome table is empty; cannot build an action enumeration")]
    EmptyOutcomeTable,

    #[error("unsupported table format for '{path}' (expected .json or .msgpack)")]
    UnknownTableFormat { path: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

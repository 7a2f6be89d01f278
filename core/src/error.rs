//! Error types
//!
//! Generator arithmetic is total, so nothing in `rng` can fail. Errors only
//! arise at the edges: selecting a generator by name, restoring a
//! checkpoint, and writing output.

use thiserror::Error;

/// Errors raised by the registry, checkpoint and output layers
#[derive(Debug, Error)]
pub enum PrngError {
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Checkpoint mismatch: {0}")]
    CheckpointMismatch(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PrngError {
    fn from(e: serde_json::Error) -> Self {
        PrngError::Serialization(e.to_string())
    }
}

/// Result type for fallible prngzoo operations
pub type Result<T> = std::result::Result<T, PrngError>;

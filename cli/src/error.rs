//! Error types for the prngzoo CLI.

use prngzoo_core::PrngError;
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error from the generator library.
    #[error("{0}")]
    Core(#[from] PrngError),

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(e.to_string())
    }
}

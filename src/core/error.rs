//! Error types for plugin-base.
//!
//! Host-facing failures travel as [`Diagnostic`](crate::status::Diagnostic);
//! this enum covers everything around them (configuration, I/O, logging).

use crate::status::Diagnostic;
use thiserror::Error;

/// Result type alias for plugin-base operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the host callback boundary.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Logging errors
    #[error("Logging setup failed: {0}")]
    Logging(String),

    // Host errors
    #[error("Host rejected the request: {0}")]
    Host(#[from] Diagnostic),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

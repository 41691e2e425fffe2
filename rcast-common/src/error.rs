//! Common error types for replay-cast

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for replay-cast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared by the analysis pass and the spectator runtime
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Match file could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file is present but not valid TOML for `DirectorConfig`
    #[error("TOML error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Match data violates a structural rule (seat gaps, unknown owners, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

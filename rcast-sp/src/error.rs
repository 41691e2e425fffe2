//! Error types for rcast-sp

use rcast_common::MatchSecond;
use thiserror::Error;

/// Spectator runtime errors
#[derive(Error, Debug)]
pub enum Error {
    /// Model, config or I/O error from the shared library
    #[error(transparent)]
    Common(#[from] rcast_common::Error),

    /// Clock reader found no timer
    #[error("Match clock not found")]
    ClockUnavailable,

    /// Reading jumped further back than a pause explains
    #[error("Implausible clock reading {reading}s after {previous}s")]
    ImplausibleClock {
        reading: MatchSecond,
        previous: MatchSecond,
    },

    /// Command sink rejected or failed to deliver a command
    #[error("Command failed: {0}")]
    Command(String),

    /// A single attempt ran past its time limit
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    /// Session or process cancellation observed
    #[error("Cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience Result type using the rcast-sp Error
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Common(rcast_common::Error::Io(err))
    }
}

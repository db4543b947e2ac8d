//! Error types for probing and host-list configuration.

use thiserror::Error;

/// Errors surfaced to callers of the probing API.
///
/// Network, process and privilege failures are not errors: they are
/// reported as an unreachable [`crate::ping::result::ProbeResult`].
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Unsupported probe method: {0}")]
    UnsupportedMethod(String),

    #[error("Invalid probe target {host:?}: {reason}")]
    InvalidTarget { host: String, reason: &'static str },

    #[error("Invalid host list: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

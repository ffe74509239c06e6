//! # AppError
//!
//! Centralized error handling for the swipedeck layers.
//! Ports, the repository and the use cases pass these through untouched;
//! the controllers in `sd-feed` are where they get logged.

use thiserror::Error;

/// The primary error type for all sd-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// The state file could not be read, written or replaced.
    #[error("state store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The state file exists but does not hold a valid list of states.
    #[error("state store holds undecodable data: {0}")]
    Decode(#[source] serde_json::Error),

    /// The in-memory state list could not be serialized.
    #[error("failed to encode profile states: {0}")]
    Encode(#[source] serde_json::Error),

    /// Opaque failure reported by a remote profile source.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

/// A specialized Result type for swipedeck logic.
pub type Result<T> = std::result::Result<T, AppError>;

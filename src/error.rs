//! Error types for the expense categorization engine

use thiserror::Error;

/// Result type alias for categorization operations
pub type Result<T> = std::result::Result<T, CategorizerError>;

#[derive(Error, Debug)]
pub enum CategorizerError {
    /// Empty or whitespace-only input; rejected at the caller boundary
    /// and never forwarded to a classifier.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport failure, timeout, non-success status, or a malformed
    /// payload from the remote service. Recovered by falling back
    /// locally; never surfaced to the end user as a crash.
    #[error("Remote service unavailable: {0}")]
    RemoteUnavailable(String),

    /// No credentials configured. Expected steady state (offline mode),
    /// routed around silently rather than reported as a failure.
    #[error("Remote service not configured")]
    RemoteMisconfigured,

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

//! Error handling for the hashing module

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Name that does not match any supported digest
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;

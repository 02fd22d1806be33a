//! Error types for the post-quantum cryptography crate

use crate::KeySizeMode;
use thiserror::Error;

/// Result type alias for post-quantum cryptography operations
pub type Result<T> = std::result::Result<T, PqCryptoError>;

/// Errors from ML-KEM key handling and encapsulation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PqCryptoError {
    /// Key bytes of the wrong length for the level
    #[error("Invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize {
        /// Expected key size
        expected: usize,
        /// Actual key size provided
        actual: usize,
    },

    /// Key bytes of the right length that are not a usable key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Encapsulation attempted with no public key in the slot
    #[error("No encapsulation key for {0}: generate or import one first")]
    NoPublicKey(KeySizeMode),

    /// Decapsulation attempted with no private key in the slot
    #[error("No decapsulation key for {0}: generate or import one first")]
    NoPrivateKey(KeySizeMode),

    /// Ciphertext of the wrong length for the level
    #[error("Invalid ciphertext size: expected {expected}, got {actual}")]
    InvalidCiphertextSize {
        /// Expected ciphertext size
        expected: usize,
        /// Actual size provided
        actual: usize,
    },

    /// Decapsulation operation failed
    #[error("Decapsulation failed: {0}")]
    DecapsulationFailed(String),

    /// Level name that no parameter set matches
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

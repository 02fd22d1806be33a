//! Error handling for the cipher module

use cryptform_common::RandomnessError;
use thiserror::Error;

/// Cipher-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Key length not accepted by the cipher
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Accepted lengths in bytes
        expected: &'static str,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Nonce length not accepted by the cipher
    #[error("Invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength {
        /// Expected nonce length in bytes
        expected: usize,
        /// Actual nonce length in bytes
        actual: usize,
    },

    /// Counter text that is not an unsigned 32-bit integer
    #[error("Invalid counter '{0}': expected an unsigned 32-bit integer")]
    InvalidCounter(String),

    /// Ciphertext shorter than the framing of its mode
    #[error("Ciphertext too short: minimum {minimum} bytes, got {actual}")]
    TooShort {
        /// Minimum framed length in bytes
        minimum: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// CBC ciphertext body that is not a whole number of blocks
    #[error("Ciphertext body of {actual} bytes is not a multiple of the {block_size}-byte block")]
    MisalignedCiphertext {
        /// Cipher block size in bytes
        block_size: usize,
        /// Body length in bytes
        actual: usize,
    },

    /// PKCS#7 padding did not verify after CBC decryption
    #[error("Invalid PKCS#7 padding")]
    InvalidPadding,

    /// AEAD tag verification failed
    #[error("Authentication failed: ciphertext or tag was modified")]
    Authentication,

    /// Stream cipher counter would wrap past its limit
    #[error("Keystream counter overflow")]
    CounterOverflow,

    /// IV, nonce or key text generation could not obtain randomness
    #[error(transparent)]
    Randomness(#[from] RandomnessError),

    /// Mode name that no cipher provides
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A primitive rejected parameters that validation already accepted
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<aes::cipher::InvalidLength> for CipherError {
    fn from(err: aes::cipher::InvalidLength) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Result type for cipher operations
pub type Result<T> = std::result::Result<T, CipherError>;

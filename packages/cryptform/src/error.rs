//! Error taxonomy shared by every transform

use cryptform_cipher::CipherError;
use cryptform_common::RandomnessError;
use cryptform_encoding::EncodingError;
use cryptform_pqcrypto::{KeySizeMode, PqCryptoError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for transform operations
pub type Result<T> = std::result::Result<T, TransformError>;

/// Configuration field a validation failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionField {
    /// AES block mode
    CipherMode,
    /// Key text
    Key,
    /// ChaCha20 nonce text
    Nonce,
    /// ChaCha20 block counter text
    Counter,
    /// ML-KEM level
    KeySize,
    /// Base32/Base64 alphabet
    Base,
    /// SHA variant
    HashAlgorithm,
    /// Imported ML-KEM encapsulation key
    EncapsulationKey,
    /// Imported ML-KEM decapsulation key
    DecapsulationKey,
}

impl OptionField {
    /// Field name as it appears in an options document
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CipherMode => "cipher_mode",
            Self::Key => "key",
            Self::Nonce => "nonce",
            Self::Counter => "counter",
            Self::KeySize => "key_size",
            Self::Base => "base",
            Self::HashAlgorithm => "hash_algorithm",
            Self::EncapsulationKey => "encapsulation_key",
            Self::DecapsulationKey => "decapsulation_key",
        }
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors surfaced by configuring or executing a transform
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A configured value failed its precondition; re-enter the field
    #[error("Invalid {field}: {reason}")]
    Validation {
        /// Offending field
        field: OptionField,
        /// What was wrong with it
        reason: String,
    },

    /// Input text could not be decoded into bytes
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] EncodingError),

    /// Ciphertext shorter than the framing of its mode
    #[error("Ciphertext too short: minimum {minimum} bytes, got {actual}")]
    TooShort {
        /// Minimum framed length in bytes
        minimum: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// AEAD tag did not verify; no plaintext is released
    #[error("Authentication failed: ciphertext was modified or the key is wrong")]
    Authentication,

    /// Unauthenticated ciphertext whose block structure or padding is broken
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// KEM ciphertext malformed for the held decapsulation key
    #[error("Decapsulation failed: {0}")]
    Decapsulation(String),

    /// Encapsulation attempted before a public key was generated or imported
    #[error("No public key for {0}: generate or import one first")]
    NoPublicKey(KeySizeMode),

    /// Decapsulation attempted before a private key was generated or imported
    #[error("No private key for {0}: generate or import one first")]
    NoPrivateKey(KeySizeMode),

    /// Registry lookup miss
    #[error("Transform '{name}' not found in category '{category}'")]
    NotFound {
        /// Requested category
        category: String,
        /// Requested transform name
        name: String,
    },

    /// OS randomness was unavailable
    #[error(transparent)]
    Randomness(#[from] RandomnessError),

    /// An options document could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Background task lost, or a primitive rejected input validation accepted
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TransformError {
    /// Field-scoped validation failure
    pub fn validation(field: OptionField, reason: impl fmt::Display) -> Self {
        Self::Validation {
            field,
            reason: reason.to_string(),
        }
    }

    /// Validation failure for a field that must be filled in
    #[must_use]
    pub fn required(field: OptionField) -> Self {
        Self::validation(field, "required")
    }

    /// Field this error is scoped to, for validation failures
    #[must_use]
    pub fn field(&self) -> Option<OptionField> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<CipherError> for TransformError {
    fn from(err: CipherError) -> Self {
        match err {
            CipherError::InvalidKeyLength { .. } => Self::validation(OptionField::Key, err),
            CipherError::InvalidNonceLength { .. } => Self::validation(OptionField::Nonce, err),
            CipherError::InvalidCounter(_) | CipherError::CounterOverflow => {
                Self::validation(OptionField::Counter, err)
            }
            CipherError::UnsupportedAlgorithm(_) => Self::validation(OptionField::CipherMode, err),
            CipherError::TooShort { minimum, actual } => Self::TooShort { minimum, actual },
            CipherError::MisalignedCiphertext { .. } | CipherError::InvalidPadding => {
                Self::Decryption(err.to_string())
            }
            CipherError::Authentication => Self::Authentication,
            CipherError::Randomness(inner) => Self::Randomness(inner),
            CipherError::Internal(message) => Self::Internal(message),
        }
    }
}

impl From<PqCryptoError> for TransformError {
    fn from(err: PqCryptoError) -> Self {
        match err {
            PqCryptoError::NoPublicKey(level) => Self::NoPublicKey(level),
            PqCryptoError::NoPrivateKey(level) => Self::NoPrivateKey(level),
            PqCryptoError::InvalidCiphertextSize { .. } | PqCryptoError::DecapsulationFailed(_) => {
                Self::Decapsulation(err.to_string())
            }
            PqCryptoError::UnsupportedAlgorithm(_) => Self::validation(OptionField::KeySize, err),
            // imports are validated on the way in, so a bad key here is a bug
            PqCryptoError::InvalidKeySize { .. } | PqCryptoError::InvalidKey(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

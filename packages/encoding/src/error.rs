//! Errors for the codec transforms

use thiserror::Error;

/// Text that could not be decoded back into bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Malformed Ascii85 input
    #[error("illegal ascii85 data at input byte {offset}: {reason}")]
    Ascii85 {
        /// Byte offset in the input where decoding stopped
        offset: usize,
        /// What was wrong at that offset
        reason: &'static str,
    },

    /// Malformed Base32 input
    #[error("invalid base32: {0}")]
    Base32(String),

    /// Malformed Base64 input
    #[error("invalid base64: {0}")]
    Base64(String),

    /// Malformed hexadecimal input
    #[error("invalid hex: {0}")]
    Hex(String),

    /// Alphabet name that no codec provides
    #[error("unknown alphabet '{0}'")]
    UnknownAlphabet(String),
}

impl From<base64::DecodeError> for EncodingError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err.to_string())
    }
}

impl From<hex::FromHexError> for EncodingError {
    fn from(err: hex::FromHexError) -> Self {
        Self::Hex(err.to_string())
    }
}

impl From<data_encoding::DecodeError> for EncodingError {
    fn from(err: data_encoding::DecodeError) -> Self {
        Self::Base32(err.to_string())
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, EncodingError>;

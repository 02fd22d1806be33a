//! Lowercase hexadecimal

use crate::Result;

/// Encode bytes as lowercase hex without separators
#[must_use]
pub fn encode(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hex text (either case)
///
/// # Errors
///
/// Returns [`crate::EncodingError::Hex`] on odd length or a non-hex digit.
pub fn decode(text: &[u8]) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

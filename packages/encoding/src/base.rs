//! Base32 and Base64 with the standard RFC 4648 alphabets and padding

use crate::{EncodingError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alphabet selected by the base codec transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BaseAlphabet {
    /// RFC 4648 Base32 (`A-Z2-7`, `=` padding)
    #[default]
    #[serde(rename = "base32")]
    Base32,

    /// RFC 4648 Base64 (`A-Za-z0-9+/`, `=` padding)
    #[serde(rename = "base64")]
    Base64,
}

impl BaseAlphabet {
    /// Menu name of the alphabet
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Base32 => "base32",
            Self::Base64 => "base64",
        }
    }

    /// All selectable alphabets in menu order
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Base32, Self::Base64]
    }

    /// Encode bytes with this alphabet
    #[must_use]
    pub fn encode(self, data: &[u8]) -> String {
        match self {
            Self::Base32 => data_encoding::BASE32.encode(data),
            Self::Base64 => STANDARD.encode(data),
        }
    }

    /// Decode text with this alphabet
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::Base32`] or [`EncodingError::Base64`] on
    /// characters outside the alphabet or bad padding.
    pub fn decode(self, text: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::Base32 => Ok(data_encoding::BASE32.decode(text)?),
            Self::Base64 => decode_base64(text),
        }
    }
}

impl fmt::Display for BaseAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BaseAlphabet {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "base32" | "32" => Ok(Self::Base32),
            "base64" | "64" => Ok(Self::Base64),
            _ => Err(EncodingError::UnknownAlphabet(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for BaseAlphabet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Standard-alphabet Base64 encode, used for every textual crypto framing
#[must_use]
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Standard-alphabet Base64 decode, used for every textual crypto framing
///
/// ASCII whitespace anywhere in the input is skipped, so line-wrapped
/// text decodes.
///
/// # Errors
///
/// Returns [`EncodingError::Base64`] on malformed input.
pub fn decode_base64(text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let compact: Vec<u8> = text
        .as_ref()
        .iter()
        .copied()
        .filter(|byte| !byte.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

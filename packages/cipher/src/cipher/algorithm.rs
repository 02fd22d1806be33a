//! AES mode definitions and metadata

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// AES block size in bytes, shared by every key size
pub const BLOCK_SIZE: usize = 16;

/// GCM standard nonce size in bytes
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag size in bytes
pub const GCM_TAG_SIZE: usize = 16;

/// Block cipher mode used by the AES transform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CipherMode {
    /// Cipher Block Chaining
    ///
    /// - PKCS#7 padding to the block size
    /// - random 16-byte IV prepended to the ciphertext
    /// - no integrity protection
    #[default]
    #[serde(rename = "CBC")]
    Cbc,

    /// Galois/Counter Mode
    ///
    /// - random 12-byte nonce prepended to the sealed output
    /// - 16-byte tag appended by the seal operation
    /// - authenticated, no associated data
    #[serde(rename = "GCM")]
    Gcm,

    /// Counter mode
    ///
    /// - random 16-byte initial counter block prepended to the ciphertext
    /// - 128-bit big-endian counter increment
    /// - no integrity protection
    #[serde(rename = "CTR")]
    Ctr,
}

impl CipherMode {
    /// Short name of the mode
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cbc => "CBC",
            Self::Gcm => "GCM",
            Self::Ctr => "CTR",
        }
    }

    /// Human-readable description, for presentation only
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Cbc => "CBC - Cipher Block Chaining",
            Self::Gcm => "GCM - Galois/Counter Mode (Authenticated)",
            Self::Ctr => "CTR - Counter Mode",
        }
    }

    /// Smallest framed ciphertext this mode can decrypt
    #[must_use]
    pub fn min_ciphertext_len(self) -> usize {
        match self {
            Self::Cbc | Self::Ctr => BLOCK_SIZE,
            Self::Gcm => GCM_NONCE_SIZE + GCM_TAG_SIZE,
        }
    }

    /// Whether the mode detects tampering
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Gcm)
    }

    /// All modes in menu order
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Cbc, Self::Gcm, Self::Ctr]
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherMode {
    type Err = crate::CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cbc" => Ok(Self::Cbc),
            "gcm" => Ok(Self::Gcm),
            "ctr" => Ok(Self::Ctr),
            _ => Err(crate::CipherError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for CipherMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
